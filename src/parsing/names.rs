//! Display-name normalization.
//!
//! The roster in a session header and the label next to each message rarely
//! spell a name the same way: nicknames carry mood suffixes, brackets, emoji
//! and trailing colons. Three progressively looser forms are derived from a
//! raw name so the two spellings have several chances to meet.

use std::sync::LazyLock;

use regex::Regex;

/// Suffixes and annotations: ` - mood`, `[tag]`, `(note)`, trailing `:`.
static ANNOTATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*[-—].*|\s*\[.*?\]|\s*\([^)]+\)|\s*:\s*$").expect("valid annotation pattern")
});

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Trims and lower-cases.
pub fn light_normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Strips annotations and punctuation, collapses whitespace, lower-cases.
///
/// ```
/// use msnpack::parsing::heavy_normalize;
///
/// assert_eq!(heavy_normalize("Jane D. :"), "jane d");
/// assert_eq!(heavy_normalize("  Bob  [away] "), "bob");
/// assert_eq!(heavy_normalize("Alice - listening to music"), "alice");
/// ```
pub fn heavy_normalize(name: &str) -> String {
    let stripped = ANNOTATIONS.replace_all(name.trim(), "");
    let stripped = NON_WORD.replace_all(stripped.trim(), "");
    let collapsed = WHITESPACE.replace_all(stripped.trim(), " ");
    collapsed.trim().to_lowercase()
}

/// First space-delimited token of an already heavy-normalized name.
pub fn first_token(heavy: &str) -> &str {
    heavy.split(' ').next().unwrap_or_default()
}

/// The three lookup forms of one raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    pub light: String,
    pub heavy: String,
    pub first: String,
}

impl NameVariants {
    pub fn new(raw: &str) -> Self {
        let heavy = heavy_normalize(raw);
        let first = first_token(&heavy).to_string();
        Self {
            light: light_normalize(raw),
            heavy,
            first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_normalize() {
        assert_eq!(light_normalize("  Jane Doe "), "jane doe");
        assert_eq!(light_normalize(""), "");
    }

    #[test]
    fn test_heavy_strips_annotations() {
        assert_eq!(heavy_normalize("Bob (at work)"), "bob");
        assert_eq!(heavy_normalize("Bob [away]"), "bob");
        assert_eq!(heavy_normalize("[b]Bob[/b] cool"), "bob cool");
        assert_eq!(heavy_normalize("Alice — en vacances"), "alice");
        assert_eq!(heavy_normalize("Alice :"), "alice");
    }

    #[test]
    fn test_heavy_keeps_unicode_letters() {
        assert_eq!(heavy_normalize("Élodie ♥ Müller"), "élodie müller");
    }

    #[test]
    fn test_heavy_idempotent_examples() {
        for raw in ["Jane D. :", "~*Bob*~ [away]", "  a   b  c ", "x_y-z", "ÉCOLE"] {
            let once = heavy_normalize(raw);
            assert_eq!(heavy_normalize(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("jane doe"), "jane");
        assert_eq!(first_token("jane"), "jane");
        assert_eq!(first_token(""), "");
    }

    #[test]
    fn test_variants() {
        let v = NameVariants::new("Jane D. :");
        assert_eq!(v.light, "jane d. :");
        assert_eq!(v.heavy, "jane d");
        assert_eq!(v.first, "jane");
    }
}
