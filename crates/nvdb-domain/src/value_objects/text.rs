//! Stored text representation

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constants::PREVIEW_ELLIPSIS;

/// Value Object: News Description Text
///
/// Storage may hand back a description either as decoded text or as raw
/// bytes. Both are accepted; [`NewsText::normalize`] yields a string in
/// either case, replacing invalid UTF-8 with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NewsText {
    /// Decoded text
    Text(String),
    /// Raw bytes, expected to be UTF-8
    Bytes(Vec<u8>),
}

impl NewsText {
    /// Coerce the stored value to a string
    pub fn normalize(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Whether the normalized text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.normalize().trim().is_empty()
    }
}

impl From<String> for NewsText {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for NewsText {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for NewsText {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Shorten `text` to `max_chars` characters, appending `...` when cut
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{PREVIEW_ELLIPSIS}", &text[..end]),
        None => text.to_owned(),
    }
}
