// SPDX-License-Identifier: MPL-2.0
//! Collage editing: layers, gestures, guides and the session tying them
//! together.

pub mod gesture;
pub mod guides;
pub mod layer;
pub mod layer_list;
pub mod placement;
pub mod registry;
pub mod resize;
pub mod session;

pub use gesture::{Affordance, GestureState, InteractionController, PointerDown};
pub use guides::SnapGuides;
pub use layer::{ImageKey, Layer, LayerContent, LayerDraft, LayerId, LayerKind, LayerName};
pub use layer_list::{LayerListEntry, LayerListView};
pub use placement::TextMetrics;
pub use registry::LayerRegistry;
pub use resize::{ResizeConstraints, ResizeHandle};
pub use session::{EditorSession, SessionSettings};
