//! The environment variables read by gup-launcher

/// Set the color output to `never`, `always` or `auto`
pub const GUP_LAUNCHER_COLOR: &str = "GUP_LAUNCHER_COLOR";
/// The log level filter of the `env_logger`, `warn` if not set
pub const GUP_LAUNCHER_LOG: &str = "GUP_LAUNCHER_LOG";
/// The name or path of the interpreter which runs the gup script
pub const GUP_LAUNCHER_PYTHON: &str = "GUP_LAUNCHER_PYTHON";

/// Used for the color output if [`GUP_LAUNCHER_COLOR`] is not set
pub const CARGO_TERM_COLOR: &str = "CARGO_TERM_COLOR";
