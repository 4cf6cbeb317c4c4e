//! Messenger Plus! HTML log parser.
//!
//! Messenger Plus! Live saves each conversation as an HTML page, UTF-16LE
//! encoded, shaped like this:
//!
//! ```html
//! <div class="mplsession">
//!   <h2>Session démarrée le 1 mai 2009</h2>
//!   <ul>
//!     <li>Jane Doe (jane.doe@example.com)</li>
//!     <li>Bob [away] (bob@example.com)</li>
//!   </ul>
//!   <table>
//!     <tr><th><span class="time">(20:15)</span> Jane D. :</th><td>salut !</td></tr>
//!     <tr class="msgplus"><th>...</th><td>Bob is now Away</td></tr>
//!   </table>
//! </div>
//! ```
//!
//! Rows tagged `msgplus` are client status events and are skipped.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

use crate::Message;
use crate::config::MsnConfig;
use crate::core::models::Session;
use crate::error::Result;
use crate::message::Speaker;
use crate::parser::Parser;
use crate::parsing::{NameVariants, ParticipantMap};

/// Class marking client status rows (contact went away, nudges, ...).
const STATUS_ROW_CLASS: &str = "msgplus";

/// Parser for Messenger Plus! HTML logs.
///
/// # Example
///
/// ```rust
/// use msnpack::config::MsnConfig;
/// use msnpack::parser::Parser;
/// use msnpack::parsers::MsnParser;
///
/// let html = r#"<div class="mplsession"><h2>1 mai 2009</h2>
///   <ul><li>Me (me@example.com)</li></ul>
///   <table><tr><th><span class="time">(10:00)</span> Me :</th><td>hi</td></tr></table>
/// </div>"#;
///
/// let parser = MsnParser::with_config(MsnConfig::new("me@example.com"));
/// let sessions = parser.parse_str(html)?;
/// assert_eq!(sessions[0].messages[0].timestamp, "09.05.01, 10:00:00");
/// assert!(sessions[0].messages[0].is_own());
/// # Ok::<(), msnpack::MsnpackError>(())
/// ```
pub struct MsnParser {
    config: MsnConfig,
}

impl MsnParser {
    /// Creates a parser with default configuration (empty self identifier).
    pub fn new() -> Self {
        Self {
            config: MsnConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: MsnConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &MsnConfig {
        &self.config
    }
}

impl Default for MsnParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Selectors for the log structure, compiled on first use.
struct Selectors {
    session: Selector,
    heading: Selector,
    roster: Selector,
    roster_entry: Selector,
    row: Selector,
    time: Selector,
    sender: Selector,
    content: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    session: compile("div.mplsession"),
    heading: compile("h2"),
    roster: compile("ul"),
    roster_entry: compile("li"),
    row: compile("tr"),
    time: compile("span.time"),
    sender: compile("th"),
    content: compile("td"),
});

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

/// Text nodes trimmed and glued together.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Non-empty text nodes trimmed and joined with single spaces.
fn spaced_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sender label of a row, leaving out the time marker nested inside it.
fn sender_text(sender: ElementRef<'_>, time: ElementRef<'_>) -> String {
    let time_id = time.id();
    let text: String = sender
        .descendants()
        .filter(|node| node.id() != time_id && !node.ancestors().any(|a| a.id() == time_id))
        .filter_map(|node| node.value().as_text().map(|t| t.trim()))
        .collect();
    text.trim_end_matches(':').trim().to_string()
}

/// `(20:15)` becomes `20:15:00`; `(20:15:42)` becomes `20:15:42`.
fn normalize_time(raw: &str) -> String {
    let mut time = raw.replace(['(', ')'], "");
    if time.split(':').count() == 2 {
        time.push_str(":00");
    }
    time
}

impl MsnParser {
    fn parse_document(&self, content: &str) -> Vec<Session> {
        let selectors = &*SELECTORS;
        let document = Html::parse_document(content);

        let sessions: Vec<Session> = document
            .select(&selectors.session)
            .enumerate()
            .map(|(idx, element)| self.parse_session(idx, element, selectors))
            .collect();

        debug!(sessions = sessions.len(), "Parsed document");
        sessions
    }

    fn parse_session(&self, idx: usize, element: ElementRef<'_>, sel: &Selectors) -> Session {
        let heading = element
            .select(&sel.heading)
            .next()
            .map(|h| h.text().collect::<String>());
        let date = heading
            .as_deref()
            .and_then(|text| self.config.months.parse_heading(text));
        if date.is_none() {
            warn!(
                session = idx + 1,
                heading = heading.as_deref().unwrap_or_default(),
                "Could not parse session date, using UNKNOWN_DATE"
            );
        }

        let participants = element
            .select(&sel.roster)
            .next()
            .map(|roster| {
                let entries: Vec<String> =
                    roster.select(&sel.roster_entry).map(stripped_text).collect();
                ParticipantMap::from_entries(entries.iter().map(String::as_str))
            })
            .unwrap_or_default();
        debug!(session = idx + 1, map = ?participants, "Participant map");

        let mut session = Session {
            date,
            participants,
            messages: Vec::new(),
        };
        let date_label = session.date_label();

        for row in element.select(&sel.row) {
            if self.config.skip_status_rows
                && row.value().classes().any(|c| c == STATUS_ROW_CLASS)
            {
                continue;
            }

            let (Some(time), Some(sender), Some(content)) = (
                row.select(&sel.time).next(),
                row.select(&sel.sender).next(),
                row.select(&sel.content).next(),
            ) else {
                continue;
            };

            let timestamp = format!("{}, {}", date_label, normalize_time(&stripped_text(time)));
            let sender = sender_text(sender, time);
            let variants = NameVariants::new(&sender);
            let identifier = session.participants.resolve_variants(&variants);
            let speaker = Speaker::resolve(identifier, &self.config.self_identifier);

            trace!(
                sender = %sender,
                cleaned = %variants.heavy,
                identifier = ?identifier,
                %speaker,
                "Attributed message"
            );

            let mut msg = Message::new(timestamp, sender, spaced_text(content))
                .with_speaker(speaker);
            msg.identifier = identifier.map(str::to_string);
            session.messages.push(msg);
        }

        session
    }
}

impl Parser for MsnParser {
    fn name(&self) -> &'static str {
        "Messenger Plus! HTML"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Session>> {
        let bytes = fs::read(path)?;
        let content = self
            .config
            .encoding
            .decode(&bytes)
            .map_err(|e| e.with_path(path))?;
        Ok(self.parse_document(&content))
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Session>> {
        Ok(self.parse_document(content))
    }
}
