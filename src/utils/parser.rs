//! Parsing primitives for declaration input.

use std::hash::Hash;

/// Parse a `name[:type]` declaration pair.
///
/// Splits on the first `:` only, allowing type notations with colons.
/// Both parts are trimmed. An empty segment after the colon is treated
/// as absent.
pub fn split_declaration(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once(':') {
        Some((name, data_type)) => {
            let name = name.trim();
            let data_type = data_type.trim();
            if data_type.is_empty() {
                (name, None)
            } else {
                (name, Some(data_type))
            }
        }
        None => (raw.trim(), None),
    }
}

/// Deduplicate preserving first occurrence order.
pub fn dedupe<T>(items: Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_declaration_parses_name_type() {
        assert_eq!(split_declaration("email:string"), ("email", Some("string")));
    }

    #[test]
    fn split_declaration_handles_name_only() {
        assert_eq!(split_declaration("email"), ("email", None));
    }

    #[test]
    fn split_declaration_treats_empty_type_as_none() {
        assert_eq!(split_declaration("email:"), ("email", None));
    }

    #[test]
    fn split_declaration_handles_empty_name() {
        assert_eq!(split_declaration(":integer"), ("", Some("integer")));
    }

    #[test]
    fn split_declaration_preserves_type_colons() {
        assert_eq!(
            split_declaration("payload:json:binary"),
            ("payload", Some("json:binary"))
        );
    }

    #[test]
    fn split_declaration_trims_whitespace() {
        assert_eq!(split_declaration("email : string"), ("email", Some("string")));
    }

    #[test]
    fn dedupe_preserves_order() {
        let items = vec!["a", "b", "a", "c", "b"];
        let result = dedupe(items);
        assert_eq!(result, vec!["a", "b", "c"]);
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        let items = vec!["Create", "create"];
        let result = dedupe(items);
        assert_eq!(result, vec!["Create", "create"]);
    }
}
