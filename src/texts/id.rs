use std::fmt::{self, Display};

pub const MAX_LEN: usize = 64;

/// A path-segment token that has passed validation. The byte class excludes
/// `/`, `\`, `.`, and `%`, so a validated identifier can never name anything
/// outside the base directory.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Identifier<'a>(&'a str);

impl<'a> Identifier<'a> {
    pub fn parse(segment: &'a str) -> Result<Self, InvalidIdentifier> {
        let valid_len = (1..=MAX_LEN).contains(&segment.len());
        let valid_bytes = segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid_len && valid_bytes {
            Ok(Self(segment))
        } else {
            Err(InvalidIdentifier)
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self.0, f)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("identifier must be 1-64 characters from [A-Za-z0-9_-]")]
pub struct InvalidIdentifier;
