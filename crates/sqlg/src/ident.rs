//! Safe SQL identifier handling.
//!
//! Every table, column and index name that ends up in generated SQL goes through [`safe_name`].
//! Values never do: they are always bound as `?` parameters.
//!
//! - `*` is passed through.
//! - Names containing `(` or a space are treated as pre-formatted expressions
//!   (`COUNT(id)`, `id AS total`) and passed through.
//! - Empty names stay empty.
//! - Everything else is wrapped in backticks, after trimming backticks already present.
//!
//! # Example
//! ```
//! use sqlg::ident::safe_name;
//!
//! assert_eq!(safe_name("users"), "`users`");
//! assert_eq!(safe_name("`users`"), "`users`");
//! assert_eq!(safe_name("COUNT(id)"), "COUNT(id)");
//! ```

/// Quoting character for identifiers.
pub const QUOTE: char = '`';

/// Quote a table, column or index name.
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if is_preformatted(name) {
        return name.to_string();
    }

    let bare = name.trim_matches(QUOTE);
    let mut out = String::with_capacity(bare.len() + 2);
    out.push(QUOTE);
    out.push_str(bare);
    out.push(QUOTE);
    out
}

/// Quote every name in a list, preserving order.
pub fn safe_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| safe_name(n.as_ref())).collect()
}

/// Quote every name in a list and join them with `", "`.
pub(crate) fn join_safe_names<S: AsRef<str>>(names: &[S]) -> String {
    safe_names(names).join(", ")
}

fn is_preformatted(name: &str) -> bool {
    name == "*" || name.contains('(') || name.contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_name() {
        assert_eq!(safe_name("id"), "`id`");
    }

    #[test]
    fn wildcard_passes_through() {
        assert_eq!(safe_name("*"), "*");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(safe_name(""), "");
    }

    #[test]
    fn function_call_passes_through() {
        assert_eq!(safe_name("COUNT(id)"), "COUNT(id)");
    }

    #[test]
    fn alias_passes_through() {
        assert_eq!(safe_name("id AS x"), "id AS x");
    }

    #[test]
    fn strips_existing_quotes() {
        assert_eq!(safe_name("`id`"), "`id`");
        assert_eq!(safe_name("``id"), "`id`");
    }

    #[test]
    fn quoting_is_idempotent() {
        let once = safe_name("user_name");
        assert_eq!(safe_name(&once), once);
    }

    #[test]
    fn dotted_name_is_quoted_as_one() {
        assert_eq!(safe_name("db.users"), "`db.users`");
    }

    #[test]
    fn names_keep_order() {
        assert_eq!(safe_names(&["b", "a", "*"]), vec!["`b`", "`a`", "*"]);
        assert_eq!(join_safe_names(&["id", "name"]), "`id`, `name`");
    }
}
