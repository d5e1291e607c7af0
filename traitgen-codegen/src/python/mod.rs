//! Python code generation modules.

pub mod classes;
pub mod index;
pub mod stubs;

pub use classes::ClassEmitter;
pub use index::IndexEmitter;
pub use stubs::TestStubEmitter;

/// Python reserved words.
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Returns true if `name` can be used as a Python identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
    starts_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !KEYWORDS.contains(&name)
}

/// Renders a Python single-quoted string literal.
///
/// Control characters are written as `\xNN` escapes.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Renders a Python list of string literals.
#[must_use]
pub fn string_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("bar"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("FieldDef2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2d"));
        assert!(!is_identifier("$schema"));
        assert!(!is_identifier("Foo<Bar>"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier("from"));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("red"), "'red'");
        assert_eq!(string_literal("it's"), r"'it\'s'");
        assert_eq!(string_literal("a\\b"), r"'a\\b'");
        assert_eq!(string_literal("line\nbreak"), r"'line\nbreak'");
        assert_eq!(string_literal("a\0b"), r"'a\x00b'");
        assert_eq!(string_literal("bell\u{7}\u{7f}\u{85}"), r"'bell\x07\x7f\x85'");
        assert_eq!(string_literal("caf\u{e9}"), "'caf\u{e9}'");
    }

    #[test]
    fn test_string_list() {
        let values = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        assert_eq!(string_list(&values), "['red', 'green', 'blue']");
        assert_eq!(string_list(&[]), "[]");
    }
}
