//! Creative modes and content genres.

use serde::{Deserialize, Serialize};

/// Prompt family used by the actors.
///
/// The serialized form is the top-level table name in the prompt file.
///
/// # Examples
///
/// ```
/// use scrivener_core::CreativeMode;
///
/// assert_eq!(CreativeMode::Author.as_ref(), "AUTHOR");
/// assert_eq!("PODCAST".parse::<CreativeMode>().unwrap(), CreativeMode::Podcast);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CreativeMode {
    /// Long-form fiction
    Author,
    /// History podcast scripts
    Podcast,
}

/// Content the pipeline can generate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Genre {
    /// Novels written chapter by chapter
    LongformFiction,
    /// Podcast episodes written segment by segment
    Podcast,
}

impl Genre {
    /// Prompt family for this genre.
    pub fn creative_mode(self) -> CreativeMode {
        match self {
            Genre::LongformFiction => CreativeMode::Author,
            Genre::Podcast => CreativeMode::Podcast,
        }
    }
}
