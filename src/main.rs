// SPDX-License-Identifier: MPL-2.0
use iced_signin::app::{self, paths, Flags};
use iced_signin::config;
use iced_signin::resources::EmbeddedResources;
use std::process::ExitCode;

const HELP: &str = "\
iced_signin - bank sign-in screen

USAGE:
  iced_signin [OPTIONS]

OPTIONS:
  --lang <CODE>         Start in the given language (en, ar)
  --config-dir <DIR>    Read settings.toml from DIR
  --write-config        Rewrite settings.toml (defaults if missing) and exit;
                        fails if the existing file does not parse
  -h, --help            Print this help
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("iced_signin=info"),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let write_config = args.contains("--write-config");
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());

    if write_config {
        return match config::write_current() {
            Ok(path) => {
                log::info!("wrote {}", path.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let (config, warning) = config::load();
    match (warning, config::config_path()) {
        (Some(warning), _) => log::warn!("using default settings: {warning}"),
        (None, Some(path)) if path.exists() => {
            log::info!("settings loaded from {}", path.display());
        }
        _ => log::info!("no settings file, using defaults"),
    }

    let resources = match EmbeddedResources::load() {
        Ok(resources) => resources,
        Err(err) => {
            log::error!("failed to load embedded resources: {err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags, config, resources) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
