// SPDX-License-Identifier: MPL-2.0
//! Photo metadata and the captions derived from it.

mod caption;
mod types;

pub use caption::{format_caption, CaptionLabels};
pub use types::ExifTags;
