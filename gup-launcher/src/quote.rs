//! Conversion between argument lists and Windows command lines
//!
//! `CreateProcessW` takes a single command line instead of an argument vector and the started
//! program splits it again with the rules of the Microsoft C runtime. [`quote_args`] produces a
//! command line for these rules (the same convention as python's `subprocess.list2cmdline`) and
//! [`split_command_line`] implements the splitting.

/// Join the `args` to a single command line
///
/// An argument is put in double quotes if it is empty or contains a space or a tab. Double quotes
/// within an argument are escaped with a backslash and the backslashes preceding them are doubled.
/// Backslashes which are not followed by a double quote are literal, except at the end of a quoted
/// argument where they are doubled, so the closing quote is not escaped.
///
/// # Examples
///
/// ```
/// use gup_launcher::quote::quote_args;
///
/// assert_eq!(quote_args(&["gup", "-u", "out dir\\"]), r#"gup -u "out dir\\""#);
/// assert_eq!(quote_args(&["say \"hi\""]), r#""say \"hi\"""#);
/// assert_eq!(quote_args::<&str>(&[]), "");
/// ```
pub fn quote_args<T>(args: &[T]) -> String
where
    T: AsRef<str>,
{
    let mut line = String::new();
    for arg in args {
        if !line.is_empty() {
            line.push(' ');
        }
        quote_arg_into(arg.as_ref(), &mut line);
    }
    line
}

/// Append the quoted `arg` to `line`
fn quote_arg_into(arg: &str, line: &mut String) {
    let needs_quoting = arg.is_empty() || arg.contains([' ', '\t']);
    if needs_quoting {
        line.push('"');
    }

    // We don't know yet if these backslashes need to be doubled
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                push_backslashes(line, backslashes * 2);
                backslashes = 0;
                line.push_str("\\\"");
            }
            c => {
                push_backslashes(line, backslashes);
                backslashes = 0;
                line.push(c);
            }
        }
    }

    if needs_quoting {
        push_backslashes(line, backslashes * 2);
        line.push('"');
    } else {
        push_backslashes(line, backslashes);
    }
}

fn push_backslashes(line: &mut String, count: usize) {
    line.extend(std::iter::repeat('\\').take(count));
}

/// Split a command line into its arguments following the Microsoft C runtime rules
///
/// The `line` is expected without the program name, which has slightly different rules.
///
/// * Spaces and tabs outside of double quotes separate the arguments
/// * `2n` backslashes followed by a double quote are `n` backslashes and the double quote starts
///   or ends a quoted section
/// * `2n + 1` backslashes followed by a double quote are `n` backslashes and a literal double
///   quote
/// * Backslashes not followed by a double quote are literal
/// * Two double quotes within a quoted section are a literal double quote
///
/// This is the inverse of [`quote_args`].
///
/// # Examples
///
/// ```
/// use gup_launcher::quote::split_command_line;
///
/// assert_eq!(
///     split_command_line(r#"gup -u "out dir\\" a\"b"#),
///     vec!["gup", "-u", "out dir\\", "a\"b"]
/// );
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = vec![];
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|c| matches!(c, ' ' | '\t')).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut arg = String::new();
        let mut in_quotes = false;
        let mut backslashes = 0usize;
        while let Some(c) = chars.next() {
            match c {
                '\\' => backslashes += 1,
                '"' => {
                    push_backslashes(&mut arg, backslashes / 2);
                    if backslashes % 2 == 1 {
                        arg.push('"');
                    } else if in_quotes && chars.next_if_eq(&'"').is_some() {
                        arg.push('"');
                    } else {
                        in_quotes = !in_quotes;
                    }
                    backslashes = 0;
                }
                ' ' | '\t' if !in_quotes => {
                    push_backslashes(&mut arg, backslashes);
                    backslashes = 0;
                    break;
                }
                c => {
                    push_backslashes(&mut arg, backslashes);
                    backslashes = 0;
                    arg.push(c);
                }
            }
        }
        push_backslashes(&mut arg, backslashes);
        args.push(arg);
    }

    args
}
