//! The module responsible for launching the gup script

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::Result;
use log::debug;
use which::which;

use crate::envs;
use crate::error::Error;

/// The interpreter used if [`envs::GUP_LAUNCHER_PYTHON`] is not set
pub const DEFAULT_INTERPRETER: &str = "python";
/// The file name of the script which is expected next to the running executable
pub const SCRIPT_NAME: &str = "gup";

/// Runs the gup script with an interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    interpreter: PathBuf,
    script: PathBuf,
}

impl Launcher {
    /// Create a new `Launcher` from an already resolved `interpreter` and `script`
    pub fn new<I, S>(interpreter: I, script: S) -> Self
    where
        I: Into<PathBuf>,
        S: Into<PathBuf>,
    {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Create a new `Launcher` for the script next to the running executable
    ///
    /// The interpreter is [`DEFAULT_INTERPRETER`] unless overridden with
    /// [`envs::GUP_LAUNCHER_PYTHON`] and is looked up in the `PATH`.
    pub fn from_env() -> Result<Self> {
        let current_exe = std::env::current_exe()
            .map_err(|error| Error::ExecutableNotFound(error.to_string()))?;
        debug!("Running executable: '{}'", current_exe.display());

        let script = script_path(&current_exe)?;
        let interpreter = std::env::var_os(envs::GUP_LAUNCHER_PYTHON)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_INTERPRETER.into());
        let interpreter = resolve_binary_path(interpreter)?;

        Ok(Self::new(interpreter, script))
    }

    /// The interpreter
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// The path to the gup script
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// The complete argument list for the interpreter: the script followed by the `raw_args`
    pub fn args<I, T>(&self, raw_args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        std::iter::once(self.script.clone().into_os_string())
            .chain(raw_args.into_iter().map(Into::into))
            .collect()
    }

    /// Build the [`Command`] which runs the interpreter with the script and the `raw_args`
    ///
    /// On Windows the process is created with a single command line, which the interpreter
    /// splits again with the rules of the C runtime. The arguments are therefore joined with
    /// [`crate::quote::quote_args`]. Everywhere else the arguments are passed through as they are.
    pub fn command<I, T>(&self, raw_args: I) -> Result<Command>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = self.args(raw_args);
        let mut command = Command::new(&self.interpreter);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;

            let args = args
                .into_iter()
                .map(|arg| {
                    arg.into_string()
                        .map_err(|arg| Error::InvalidArgument(arg.to_string_lossy().into_owned()))
                })
                .collect::<Result<Vec<String>, Error>>()?;

            let line = crate::quote::quote_args(&args);
            debug!(
                "Running '{}' with command line: {line}",
                self.interpreter.display()
            );
            command.raw_arg(line);
        }

        #[cfg(not(windows))]
        {
            if log::log_enabled!(log::Level::Debug) {
                let lossy = args
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect::<Vec<String>>();
                debug!(
                    "Running '{}' with arguments: {}",
                    self.interpreter.display(),
                    shlex::try_join(lossy.iter().map(String::as_str))
                        .unwrap_or_else(|_| lossy.join(" "))
                );
            }
            command.args(args);
        }

        Ok(command)
    }

    /// Run the interpreter with the script and the `raw_args` and wait for it to finish
    ///
    /// The standard streams are inherited. Returns the exit code of the child process as
    /// converted by [`exit_code`].
    pub fn run<I, T>(&self, raw_args: I) -> Result<i32>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut child = self
            .command(raw_args)?
            .spawn()
            .map_err(|error| Error::LaunchError(self.interpreter.clone(), error.to_string()))?;

        let status = child
            .wait()
            .map_err(|error| Error::WaitError(self.interpreter.clone(), error.to_string()))?;
        debug!("'{}' finished: {status}", self.interpreter.display());

        Ok(exit_code(status))
    }
}

/// The path of the gup script next to the `executable`
///
/// The script has to exist.
pub fn script_path(executable: &Path) -> Result<PathBuf> {
    let dir = executable.parent().ok_or_else(|| {
        Error::ExecutableNotFound(format!(
            "'{}' has no parent directory",
            executable.display()
        ))
    })?;

    let script = dir.join(SCRIPT_NAME);
    if script.is_file() {
        debug!("Found gup script: '{}'", script.display());
        Ok(script)
    } else {
        Err(Error::ScriptNotFound(script).into())
    }
}

/// Resolve the absolute path of the `binary` with `which`
pub fn resolve_binary_path<T>(binary: T) -> Result<PathBuf>
where
    T: AsRef<OsStr>,
{
    let binary = binary.as_ref();
    match which(binary) {
        Ok(path) => {
            debug!("Found '{}': '{}'", binary.to_string_lossy(), path.display());
            Ok(path)
        }
        Err(error) => Err(Error::InterpreterNotFound(
            binary.to_string_lossy().into_owned(),
            error.to_string(),
        )
        .into()),
    }
}

/// Convert the [`ExitStatus`] of the child into the exit code of this process
///
/// The exit code is passed through unchanged. On unix, a child terminated by a signal results in
/// `128 + signal` like in a shell.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
