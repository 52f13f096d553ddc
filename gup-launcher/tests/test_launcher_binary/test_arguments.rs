use rstest::rstest;

use crate::common::{print_args_output, Sandbox, PRINT_ARGS_SCRIPT};

#[test]
fn test_flag_and_value_with_space() {
    Sandbox::new()
        .with_script(PRINT_ARGS_SCRIPT)
        .command()
        .args(["--flag", "value with space"])
        .assert()
        .success()
        .stdout("2\n<--flag>\n<value with space>\n")
        .stderr("");
}

#[rstest]
#[case::no_args(&[])]
#[case::empty(&[""])]
#[case::empty_between(&["a", "", "b"])]
#[case::whitespace(&[" ", "\t", "a\tb  c"])]
#[case::quotes(&["a\"b", "\"", "'single quoted'"])]
#[case::backslashes(&["C:\\path\\", "a b\\", "\\\\"])]
#[case::launcher_like_flags(&["--help", "--version", "-V"])]
#[case::double_dash(&["--", "-u", "all"])]
#[case::shell_characters(&["$HOME", "*", "a;b", "`id`"])]
#[case::unicode(&["ünïcødé", "✓ ✓"])]
fn test_arguments_are_forwarded_verbatim(#[case] args: &[&str]) {
    Sandbox::new()
        .with_script(PRINT_ARGS_SCRIPT)
        .command()
        .args(args)
        .assert()
        .success()
        .stdout(print_args_output(args))
        .stderr("");
}

#[test]
fn test_script_is_the_first_argument_of_the_interpreter() {
    let sandbox = Sandbox::new().with_script("printf '%s\\n' \"$0\"\n");
    let expected = format!("{}\n", sandbox.script_path().display());

    sandbox.command().assert().success().stdout(expected);
}

#[test]
fn test_stdin_is_inherited() {
    Sandbox::new()
        .with_script("cat\n")
        .command()
        .write_stdin("some input\nfor gup\n")
        .assert()
        .success()
        .stdout("some input\nfor gup\n");
}

#[test]
fn test_stderr_is_inherited() {
    Sandbox::new()
        .with_script("echo 'to stderr' >&2\n")
        .command()
        .assert()
        .success()
        .stdout("")
        .stderr("to stderr\n");
}
