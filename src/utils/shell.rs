//! Shell quoting for display and splitting of command prefixes.
//!
//! Commands are never handed to a shell; quoting only makes the logged
//! command line copy-pasteable.

/// Escape a value for use inside single quotes.
/// Replaces `'` with `'\''` (end quote, escaped quote, start quote).
pub fn escape_single_quote_content(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Quote a single argument for shell display.
/// - Empty strings become `''`
/// - Strings with shell metacharacters are wrapped in single quotes
/// - Embedded single quotes are escaped
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    const SHELL_META: &[char] = &[
        ' ', '\t', '\n', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{', '}',
        '<', '>', '|', '&', ';', '#', '~',
    ];

    if !arg.contains(SHELL_META) {
        return arg.to_string();
    }

    format!("'{}'", escape_single_quote_content(arg))
}

/// Quote and join multiple arguments.
pub fn quote_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| quote_arg(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a command prefix such as `cleos --url http://127.0.0.1:8000` into
/// words. Returns `None` when the prefix contains no program.
pub fn split_command(prefix: &str) -> Option<(String, Vec<String>)> {
    let mut words = prefix.split_whitespace().map(|s| s.to_string());
    let program = words.next()?;
    Some((program, words.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_arg_simple() {
        assert_eq!(quote_arg("seedobjs"), "seedobjs");
        assert_eq!(quote_arg("producer111e"), "producer111e");
    }

    #[test]
    fn quote_arg_with_brackets() {
        assert_eq!(quote_arg("[]"), "'[]'");
    }

    #[test]
    fn quote_arg_with_json() {
        assert_eq!(
            quote_arg(r#"[{"payer":"a","in":"b"}]"#),
            r#"'[{"payer":"a","in":"b"}]'"#
        );
    }

    #[test]
    fn quote_arg_with_single_quote() {
        assert_eq!(quote_arg("it's"), "'it'\\''s'");
    }

    #[test]
    fn quote_arg_empty() {
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn quote_args_mixed() {
        let args = vec!["push", "action", "producer111e", "clear", "[]"];
        assert_eq!(quote_args(&args), "push action producer111e clear '[]'");
    }

    #[test]
    fn split_command_with_flags() {
        let (program, args) =
            split_command("  ../cleos --wallet-url http://127.0.0.1:6666  ").unwrap();
        assert_eq!(program, "../cleos");
        assert_eq!(args, vec!["--wallet-url", "http://127.0.0.1:6666"]);
    }

    #[test]
    fn split_command_program_only() {
        let (program, args) = split_command("cleos").unwrap();
        assert_eq!(program, "cleos");
        assert!(args.is_empty());
    }

    #[test]
    fn split_command_blank_is_none() {
        assert!(split_command("   ").is_none());
    }
}
