// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vetrina::app::{self, Flags};

const HELP: &str = "\
vetrina: preview window for the showcase-site UI coordinator

USAGE:
    vetrina [OPTIONS]

OPTIONS:
    --lang <id>           Interface language (e.g. en-US, it)
    --config-dir <path>   Directory holding settings.toml
    -h, --help            Print this help

ENVIRONMENT:
    VETRINA_CONFIG_DIR    Same as --config-dir
    RUST_LOG              Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring malformed option");
            None
        }
    }
}
