//! Substitution Engine
//!
//! Literal single-pass placeholder replacement. Keys are matched as plain
//! substrings, never as patterns, so catalog data containing characters a
//! regex engine would care about (`$1`, `(`, ...) can never change what
//! gets matched. Inserted values are not rescanned: a value containing a
//! placeholder token survives verbatim.

use crate::error::{Result, ShopError};

// == Replacements ==
/// An ordered placeholder-to-value mapping.
///
/// Placeholder keys are designed to be disjoint, so insertion order must
/// not affect the rendered output; the engine guarantees this by always
/// substituting the earliest match in the template, not the first key.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placeholder and its value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// True when no placeholders are registered.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// == Render ==
/// Renders a template by substituting every occurrence of every key.
///
/// The template bytes must be UTF-8. Placeholders with no registered key
/// stay verbatim in the output; registered keys that never occur are
/// silently ignored. With an empty mapping the output is the input.
pub fn render(template: &[u8], replacements: &Replacements) -> Result<String> {
    let text = std::str::from_utf8(template)
        .map_err(|e| ShopError::Internal(format!("template is not valid UTF-8: {e}")))?;

    if replacements.is_empty() {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    // Single left-to-right pass: substitute the earliest key occurrence,
    // emit the replacement, continue after the consumed key. Overlapping
    // matches at the same position resolve to the longest key.
    while !rest.is_empty() {
        let mut earliest: Option<(usize, &str, &str)> = None;
        for (key, value) in replacements.iter() {
            if key.is_empty() {
                continue;
            }
            if let Some(pos) = rest.find(key) {
                let better = match earliest {
                    None => true,
                    Some((best_pos, best_key, _)) => {
                        pos < best_pos || (pos == best_pos && key.len() > best_key.len())
                    }
                };
                if better {
                    earliest = Some((pos, key, value));
                }
            }
        }

        match earliest {
            Some((pos, key, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + key.len()..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    Ok(out)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_all_occurrences() {
        let reps = Replacements::new().with("{Name}", "Lamp");
        let out = render(b"<h1>{Name}</h1><p>{Name}</p>", &reps).unwrap();
        assert_eq!(out, "<h1>Lamp</h1><p>Lamp</p>");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let template = b"<p>{1_Name} and {Product_Title}</p>";
        let out = render(template, &Replacements::new()).unwrap();
        assert_eq!(out.as_bytes(), template);
    }

    #[test]
    fn test_unmatched_placeholders_stay_verbatim() {
        let reps = Replacements::new().with("{1_Name}", "Lamp");
        let out = render(b"{1_Name} {2_Name}", &reps).unwrap();
        assert_eq!(out, "Lamp {2_Name}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        // The inserted value contains another registered key; it must
        // survive untouched.
        let reps = Replacements::new()
            .with("{A}", "see {B}")
            .with("{B}", "bee");
        let out = render(b"{A} / {B}", &reps).unwrap();
        assert_eq!(out, "see {B} / bee");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let reps = Replacements::new()
            .with("{Desc}", "costs $1 (really)")
            .with("$1", "should not fire via backreference");
        let out = render(b"<p>{Desc}</p>", &reps).unwrap();
        assert_eq!(out, "<p>costs $1 (really)</p>");
    }

    #[test]
    fn test_order_does_not_affect_output() {
        let template = b"{1_Name} / {1_product_desc} / {1_Name}";
        let forward = Replacements::new()
            .with("{1_Name}", "Lamp")
            .with("{1_product_desc}", "desk lamp");
        let backward = Replacements::new()
            .with("{1_product_desc}", "desk lamp")
            .with("{1_Name}", "Lamp");

        assert_eq!(
            render(template, &forward).unwrap(),
            render(template, &backward).unwrap()
        );
    }

    #[test]
    fn test_longest_key_wins_at_same_position() {
        let reps = Replacements::new()
            .with("{Product}", "short")
            .with("{Product_Title}", "long");
        let out = render(b"{Product_Title}", &reps).unwrap();
        assert_eq!(out, "long");
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = render(&[0xff, 0xfe, 0x7b], &Replacements::new()).unwrap_err();
        assert!(matches!(err, crate::error::ShopError::Internal(_)));
    }
}
