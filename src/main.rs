// SPDX-License-Identifier: MPL-2.0
use draggable_player::app::{self, Flags, DEMO_CLIPS};
use std::path::PathBuf;
use url::Url;

const HELP: &str = "\
Usage: draggable_player [--config-dir DIR] [URL]

Options:
  --config-dir DIR   Read settings.toml from DIR
  -h, --help         Print this help
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    let raw_url = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());
    let content_url = match raw_url {
        Some(raw) => Url::parse(&raw)?,
        None => Url::parse(DEMO_CLIPS[0])?,
    };

    log::info!("starting with {content_url}");
    app::run(Flags {
        config_dir,
        content_url,
    })?;
    Ok(())
}
