//! The module containing the crate main [`Error`] type

use std::fmt::Display;
use std::path::PathBuf;

/// The main gup-launcher error type
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Error {
    /// The running executable or the directory it lives in could not be determined
    ///
    /// `ExecutableNotFound(message)`
    ExecutableNotFound(String),
    /// The interpreter could not be found in the `PATH`
    ///
    /// `InterpreterNotFound(interpreter, message)`
    InterpreterNotFound(String, String),
    /// An argument can't be passed on to the child process
    ///
    /// `InvalidArgument(lossy_argument)`
    InvalidArgument(String),
    /// The error when trying to start the child [`std::process::Command`] fails
    ///
    /// `LaunchError(executable_path, message)`
    LaunchError(PathBuf, String),
    /// The script next to the running executable does not exist
    ///
    /// `ScriptNotFound(script_path)`
    ScriptNotFound(PathBuf),
    /// The child process was started but waiting for it failed
    ///
    /// `WaitError(executable_path, message)`
    WaitError(PathBuf, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExecutableNotFound(message) => {
                write!(f, "Unable to locate the running executable: {message}")
            }
            Self::InterpreterNotFound(interpreter, message) => {
                write!(
                    f,
                    "{message}: '{interpreter}' could not be found. Is '{interpreter}' installed, \
                     executable and in the PATH?"
                )
            }
            Self::InvalidArgument(arg) => {
                write!(f, "Invalid argument '{arg}': Only valid unicode is supported")
            }
            Self::LaunchError(exec, message) => {
                write!(f, "Error launching '{}': {message}", exec.display())
            }
            Self::ScriptNotFound(path) => {
                write!(
                    f,
                    "The gup script '{}' does not exist. It is expected in the same directory as \
                     this executable",
                    path.display()
                )
            }
            Self::WaitError(exec, message) => {
                write!(
                    f,
                    "Error waiting for '{}' to finish: {message}",
                    exec.display()
                )
            }
        }
    }
}

impl std::error::Error for Error {}
