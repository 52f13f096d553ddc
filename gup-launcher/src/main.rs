//! The `gup-launcher` binary
use std::io::Write;

use colored::{control, Colorize};
use env_logger::Env;
use gup_launcher::envs;
use log::error;

/// The main function of the `gup-launcher` binary
///
/// The logging interface and the usage of colors are configured as early as possible. Errors of
/// [`gup_launcher::run`] are logged and result in exit code `1`, otherwise we exit with the exit
/// code of the gup script.
fn main() {
    // Configure the colored crate to respect GUP_LAUNCHER_COLOR and CARGO_TERM_COLOR
    let launcher_color = std::env::var(envs::GUP_LAUNCHER_COLOR).ok();
    if let Some(var) = launcher_color
        .clone()
        .or_else(|| std::env::var(envs::CARGO_TERM_COLOR).ok())
    {
        if var == "never" {
            control::set_override(false);
        } else if var == "always" {
            control::set_override(true);
        } else {
            // do nothing
        }
    }

    // Configure the env_logger crate to respect GUP_LAUNCHER_COLOR and CARGO_TERM_COLOR
    env_logger::Builder::from_env(
        Env::default()
            .filter_or(envs::GUP_LAUNCHER_LOG, "warn")
            .write_style(
                launcher_color.map_or_else(|| envs::CARGO_TERM_COLOR, |_| envs::GUP_LAUNCHER_COLOR),
            ),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{}: {:<5}: {}",
            record
                .module_path()
                .unwrap_or_else(|| record.module_path_static().unwrap_or("???")),
            match record.level() {
                log::Level::Error => "Error".red().bold(),
                log::Level::Warn => "Warn".yellow().bold(),
                log::Level::Info => "Info".green().bold(),
                log::Level::Debug => "Debug".blue().bold(),
                log::Level::Trace => "Trace".cyan().bold(),
            },
            record.args()
        )
    })
    .init();

    match gup_launcher::run() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            error!("{error}");
            std::process::exit(1)
        }
    }
}
