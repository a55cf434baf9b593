//! Slug identities for course entities
//!
//! Every entity in the course graph is keyed by a slug derived from a
//! type prefix and the entity's source text, e.g. `topic-foundations-of-design`.
//! Equal inputs always produce equal keys, which is what deduplication
//! during import relies on.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("hardcoded slug pattern is valid"));

/// Token returned when a text has no alphanumeric content at all
pub const EMPTY_SLUG: &str = "item";

/// Convert free text into a lowercase hyphenated identifier.
///
/// Runs of characters outside `[a-z0-9]` (after lower-casing) collapse to a
/// single hyphen; leading and trailing hyphens are stripped. Text without
/// any alphanumeric content yields [`EMPTY_SLUG`].
#[must_use]
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, "-");
    let slug = replaced.trim_matches('-');
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Kind of course entity, used to namespace slug keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The course itself
    Course,
    /// Course learning outcome
    Clo,
    /// Topic
    Topic,
    /// Subtopic
    Subtopic,
    /// Lesson
    Lesson,
    /// Performance criteria
    PerformanceCriteria,
}

impl EntityKind {
    /// Prefix prepended to the source text before slugging
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Clo => "clo",
            Self::Topic => "topic",
            Self::Subtopic => "subtopic",
            Self::Lesson => "lesson",
            Self::PerformanceCriteria => "pc",
        }
    }

    /// Derive the key for an entity of this kind from its source text
    #[must_use]
    pub fn key(self, text: &str) -> String {
        slugify(&format!("{}-{text}", self.prefix()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
