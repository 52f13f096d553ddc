use gup_launcher::envs;
use predicates::prelude::*;

use crate::common::{Sandbox, PRINT_ARGS_SCRIPT};

#[test]
fn test_when_script_is_missing() {
    let sandbox = Sandbox::new();
    let expected_stderr = format!(
        "gup_launcher: Error: The gup script '{}' does not exist. It is expected in the same \
         directory as this executable\n",
        sandbox.script_path().display()
    );

    sandbox
        .command()
        .arg("--flag")
        .assert()
        .code(1)
        .stdout("")
        .stderr(expected_stderr);
}

#[test]
fn test_when_interpreter_is_missing() {
    Sandbox::new()
        .with_script(PRINT_ARGS_SCRIPT)
        .command()
        .env(envs::GUP_LAUNCHER_PYTHON, "gup-launcher-no-such-interpreter")
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::starts_with("gup_launcher: Error: ").and(predicate::str::contains(
                "'gup-launcher-no-such-interpreter' could not be found. Is \
                 'gup-launcher-no-such-interpreter' installed, executable and in the PATH?",
            )),
        );
}

#[test]
fn test_when_interpreter_is_an_absolute_path() {
    Sandbox::new()
        .with_script(PRINT_ARGS_SCRIPT)
        .command()
        .env(envs::GUP_LAUNCHER_PYTHON, "/bin/sh")
        .arg("a b")
        .assert()
        .success()
        .stdout("1\n<a b>\n");
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    Sandbox::new()
        .with_script(PRINT_ARGS_SCRIPT)
        .command()
        .env(envs::GUP_LAUNCHER_LOG, "debug")
        .arg("a b")
        .assert()
        .success()
        .stdout("1\n<a b>\n")
        .stderr(
            predicate::str::contains("gup_launcher::launcher: Debug: Found gup script")
                .and(predicate::str::contains("with arguments:")),
        );
}
