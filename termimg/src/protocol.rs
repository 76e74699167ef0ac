// ABOUTME: Image protocol variants a terminal can be driven with
// ABOUTME: Parses explicit overrides verbatim without validating them

use std::fmt;

/// Protocol selected for one render invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protocol {
    Kitty,
    Iterm2,
    Sixel,
    Ansi,
    None,
    /// Override value that names no known protocol, kept as given
    Other(String),
}

impl Protocol {
    /// Map an override string to a protocol. Matching is exact; anything else
    /// is carried through as `Other`.
    pub fn from_override(value: &str) -> Self {
        match value {
            "kitty" => Protocol::Kitty,
            "iterm2" => Protocol::Iterm2,
            "sixel" => Protocol::Sixel,
            "ansi" => Protocol::Ansi,
            "none" => Protocol::None,
            other => Protocol::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Protocol::Kitty => "kitty",
            Protocol::Iterm2 => "iterm2",
            Protocol::Sixel => "sixel",
            Protocol::Ansi => "ansi",
            Protocol::None => "none",
            Protocol::Other(value) => value,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
