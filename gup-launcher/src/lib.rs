//! The gup-launcher library
//!
//! Runs the `gup` script, which is expected in the same directory as the running executable, with
//! the python interpreter and passes all command-line arguments through.

pub mod envs;
pub mod error;
pub mod launcher;
pub mod quote;

use std::ffi::OsString;

use anyhow::Result;
pub use launcher::Launcher;

/// Launch the gup script with the arguments of this process
///
/// None of the arguments is interpreted, all of them are forwarded. Returns the exit code of the
/// script.
pub fn run() -> Result<i32> {
    let args = std::env::args_os().skip(1).collect::<Vec<OsString>>();
    Launcher::from_env()?.run(args)
}
