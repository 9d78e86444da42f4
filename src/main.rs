// SPDX-License-Identifier: MPL-2.0
use iced_collage::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Collage - photo collage editor

USAGE:
  iced_collage [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help               Print this help
  --lang <ID>              UI language (e.g. en-US, ja)
  --config-dir <DIR>       Directory holding settings.toml
  --i18n-dir <DIR>         Directory with additional .ftl translations

ENVIRONMENT:
  ICED_COLLAGE_CONFIG_DIR  Same as --config-dir
  RUST_LOG                 Log filter (e.g. iced_collage=debug)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        config_dir: optional_arg(&mut args, "--config-dir"),
        i18n_dir: optional_arg(&mut args, "--i18n-dir"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "ignoring malformed argument");
            None
        }
    }
}
