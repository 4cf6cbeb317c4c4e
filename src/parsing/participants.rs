//! Session roster and sender attribution.
//!
//! Every session header lists its participants as `Nickname (email)`. The
//! [`ParticipantMap`] registers several normalized spellings of each nickname
//! under the participant's canonical identifier, then resolves the free-text
//! sender label of each message against those spellings.

use std::sync::LazyLock;

use regex::Regex;

use super::names::{NameVariants, heavy_normalize};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^)]+@[^)]+\.[^)]+)\)").expect("valid identifier pattern")
});

/// One roster entry from a session header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Entry text with the parenthesized identifier removed.
    pub display_name: String,
    /// Lower-cased email, or the heavy-normalized name when the entry has none.
    pub identifier: String,
    /// Whether `identifier` came from an email-shaped token.
    pub has_email: bool,
}

impl Participant {
    /// Parses a roster entry such as `Jane Doe (Jane.Doe@example.com)`.
    ///
    /// ```
    /// use msnpack::parsing::Participant;
    ///
    /// let p = Participant::from_entry("Jane Doe (Jane.Doe@example.com)");
    /// assert_eq!(p.display_name, "Jane Doe");
    /// assert_eq!(p.identifier, "jane.doe@example.com");
    /// ```
    pub fn from_entry(entry: &str) -> Self {
        match IDENTIFIER.captures(entry) {
            Some(caps) => {
                let written = &caps[1];
                Self {
                    display_name: entry.replace(&format!("({written})"), "").trim().to_string(),
                    identifier: written.to_lowercase(),
                    has_email: true,
                }
            }
            None => Self {
                display_name: entry.trim().to_string(),
                identifier: heavy_normalize(entry),
                has_email: false,
            },
        }
    }
}

/// Insertion-ordered map from normalized name to canonical identifier.
///
/// The first identifier registered for a key is kept; later registrations
/// of the same key are ignored. Order matters for the substring fallback in
/// [`ParticipantMap::resolve`], so the entries live in a plain `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipantMap {
    entries: Vec<(String, String)>,
}

impl ParticipantMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from roster entry texts, in order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut map = Self::new();
        for entry in entries {
            map.register(&Participant::from_entry(entry));
        }
        map
    }

    /// Registers the lookup keys of one participant.
    ///
    /// Participants with an email get their light, heavy and first-token
    /// spellings; fallback participants only their heavy name.
    pub fn register(&mut self, participant: &Participant) {
        if participant.has_email {
            let variants = NameVariants::new(&participant.display_name);
            self.insert(variants.light, &participant.identifier);
            self.insert(variants.heavy, &participant.identifier);
            self.insert(variants.first, &participant.identifier);
        } else {
            self.insert(participant.identifier.clone(), &participant.identifier);
        }
    }

    /// Inserts `key` unless it is empty or already present.
    ///
    /// Returns `true` when the key was added.
    pub fn insert(&mut self, key: String, identifier: &str) -> bool {
        if key.is_empty() || self.get(&key).is_some() {
            return false;
        }
        self.entries.push((key, identifier.to_string()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, id)| id.as_str())
    }

    /// Resolves a sender label to a canonical identifier.
    ///
    /// Tries, in order: the heavy form, its first token, the light form,
    /// then the first key (in insertion order) that contains the heavy form
    /// or is contained in it.
    pub fn resolve(&self, sender: &str) -> Option<&str> {
        self.resolve_variants(&NameVariants::new(sender))
    }

    pub fn resolve_variants(&self, variants: &NameVariants) -> Option<&str> {
        self.get(&variants.heavy)
            .or_else(|| self.get(&variants.first))
            .or_else(|| self.get(&variants.light))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| {
                        variants.heavy.contains(key.as_str()) || key.contains(&variants.heavy)
                    })
                    .map(|(_, id)| id.as_str())
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, identifier)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, id)| (k.as_str(), id.as_str()))
    }
}
