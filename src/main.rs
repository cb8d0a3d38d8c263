// SPDX-License-Identifier: MPL-2.0
use iced_swipe::app::{self, paths, Flags};
use iced_swipe::config;
use iced_swipe::error::Error;
use iced_swipe::i18n::fluent::I18n;
use iced_swipe::ui::swipe_list::load_items;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_swipe: swipe list rows to delete them

USAGE:
  iced_swipe [OPTIONS]

OPTIONS:
  --lang <LOCALE>             Display language (e.g. en-US, fr)
  --config-dir <DIR>          Directory holding settings.toml
  --items <FILE>              TOML file with [[items]] id/content records
  --trigger-distance <PX>     Swipe distance that deletes a row
  --write-config              Save the effective settings.toml and exit
  -v, --verbose               Debug logging (RUST_LOG takes precedence)
  -h, --help                  Print this help
";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .compact()
        .try_init()
    {
        eprintln!("failed to install log subscriber: {err}");
    }
}

/// Renders an items-file error in the display language.
fn describe_items_error(err: &Error, lang: Option<String>) -> String {
    let (config, _) = config::load();
    let i18n = I18n::new(lang, &config);

    match err {
        Error::Items(items_err) => {
            let (name, value) = items_err.i18n_arg();
            i18n.tr_with_args(items_err.i18n_key(), &[(name, value.as_str())])
        }
        Error::Io(details) | Error::Config(details) => {
            i18n.tr_with_args("error-io", &[("details", details.as_str())])
        }
    }
}

/// Persists the loaded settings, with CLI overrides applied, as `settings.toml`.
fn write_config(trigger_distance: Option<f32>) -> ExitCode {
    let (mut config, _) = config::load();
    if let Some(distance) = trigger_distance {
        config.swipe.trigger_distance = Some(config::clamp_trigger_distance(distance));
    }

    let Some(dir) = paths::get_app_config_dir() else {
        tracing::error!("no config directory; pass --config-dir");
        eprintln!("no config directory; pass --config-dir");
        return ExitCode::FAILURE;
    };

    match config::save(&config) {
        Ok(()) => {
            tracing::info!(dir = %dir.display(), "settings written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "cannot write settings");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let write_settings = args.contains("--write-config");
    init_tracing(verbose);

    let parsed = (|| -> Result<_, pico_args::Error> {
        Ok((
            args.opt_value_from_str::<_, String>("--lang")?,
            args.opt_value_from_str::<_, String>("--config-dir")?,
            args.opt_value_from_str::<_, PathBuf>("--items")?,
            args.opt_value_from_str::<_, f32>("--trigger-distance")?,
        ))
    })();
    let (lang, config_dir, items_path, trigger_distance) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);

    if write_settings {
        return write_config(trigger_distance);
    }

    let items = match items_path {
        Some(path) => match load_items(&path) {
            Ok(items) => {
                tracing::info!(path = %path.display(), count = items.len(), "loaded items");
                Some(items)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "cannot load items");
                eprintln!("{}", describe_items_error(&err, lang));
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let flags = Flags {
        lang,
        items,
        trigger_distance,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
