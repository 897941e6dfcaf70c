//! Property-path resolution over parsed response bodies.
//!
//! Bodies of either format are parsed into a [`serde_json::Value`] tree,
//! so one resolver serves XML and JSON alike. The path grammar is the
//! dotted/bracketed subset used by test definitions: `a.b[0].c`.

use serde_json::Value;

/// Resolves a dotted/bracketed property path against a parsed body.
///
/// Any miss along the way (absent property, index out of range, indexing
/// into a non-container, malformed bracket) yields `None`. `None` is a
/// valid outcome, not an error; a comparison against it simply fails to
/// match. Resolution never mutates the tree.
#[must_use]
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;

    for segment in split_segments(path) {
        let (name, indexes) = parse_segment(segment)?;
        if name.is_empty() && indexes.is_empty() {
            return None;
        }

        if !name.is_empty() {
            current = current.get(name)?;
        }
        for index in indexes {
            current = current.get(index)?;
        }
    }

    Some(current)
}

/// Splits on `.` outside brackets, so `a.b[0].c` yields `a`, `b[0]`, `c`.
fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_bracket = false;

    for (i, ch) in path.char_indices() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            '.' if !in_bracket => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&path[start..]);

    segments.into_iter()
}

/// Parses one segment into its property name and trailing indexes.
///
/// `b[0][1]` becomes `("b", [0, 1])`; a bare `[2]` has an empty name.
/// Returns `None` for unclosed brackets or non-numeric indexes.
fn parse_segment(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(bracket) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };

    let name = &segment[..bracket];
    let mut indexes = Vec::new();
    let mut rest = &segment[bracket..];

    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        indexes.push(inner[..close].parse().ok()?);
        rest = &inner[close + 1..];
    }

    Some((name, indexes))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_nested_properties() {
        let tree = json!({"a": {"b": {"c": 42}}});
        assert_eq!(resolve(&tree, "a.b.c"), Some(&json!(42)));
    }

    #[test]
    fn resolves_array_indexes() {
        let tree = json!({"items": [{"id": 1}, {"id": 2}]});
        assert_eq!(resolve(&tree, "items[1].id"), Some(&json!(2)));
    }

    #[test]
    fn resolves_chained_indexes() {
        let tree = json!({"grid": [[1, 2], [3, 4]]});
        assert_eq!(resolve(&tree, "grid[1][0]"), Some(&json!(3)));
    }

    #[test]
    fn empty_path_yields_the_root() {
        let tree = json!({"a": 1});
        assert_eq!(resolve(&tree, ""), None);
        assert_eq!(resolve(&tree, "a"), Some(&json!(1)));
    }

    #[test]
    fn missing_property_is_not_found() {
        let tree = json!({"a": {"b": 1}});
        assert_eq!(resolve(&tree, "a.c"), None);
        assert_eq!(resolve(&tree, "a.b.c"), None);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let tree = json!({"items": [1]});
        assert_eq!(resolve(&tree, "items[3]"), None);
    }

    #[test]
    fn malformed_brackets_are_not_found() {
        let tree = json!({"a": [1]});
        assert_eq!(resolve(&tree, "a[x]"), None);
        assert_eq!(resolve(&tree, "a[0"), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let tree = json!({"a": {"b": [10, 20]}});
        let first = resolve(&tree, "a.b[1]").cloned();
        let second = resolve(&tree, "a.b[1]").cloned();
        assert_eq!(first, second);
        assert_eq!(first, Some(json!(20)));
    }
}
