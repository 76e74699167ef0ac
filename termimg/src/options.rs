// ABOUTME: Render options with protocol-tagged size units
// ABOUTME: Dimensions render as iTerm2 parameters or resolve to pixel counts for Kitty

use std::fmt;
use typed_builder::TypedBuilder;

/// A width or height whose unit is explicit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dimension {
    /// Let the terminal (or the source image) decide
    #[default]
    Auto,
    /// Character cells
    Cells(u32),
    /// Pixels
    Pixels(u32),
    /// Percentage of the available space
    Percent(u32),
}

impl Dimension {
    /// Pixel count for this dimension given the source image's size on the
    /// same axis. `None` means follow the source.
    pub fn resolve(self, source: u32) -> Option<u32> {
        match self {
            Dimension::Auto => None,
            Dimension::Cells(n) | Dimension::Pixels(n) => Some(n.max(1)),
            Dimension::Percent(p) => {
                let scaled = (u64::from(source) * u64::from(p) + 50) / 100;
                Some(u32::try_from(scaled).unwrap_or(u32::MAX).max(1))
            }
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Cells(n) => write!(f, "{}", n),
            Dimension::Pixels(n) => write!(f, "{}px", n),
            Dimension::Percent(n) => write!(f, "{}%", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct RenderOptions {
    pub width: Dimension,

    #[builder(default)]
    pub height: Dimension,

    /// iTerm2 only
    #[builder(default = true)]
    pub preserve_aspect_ratio: bool,
}

impl RenderOptions {
    /// Options for a plain "size" request: width in cells, everything else default
    pub fn with_width(cells: u32) -> Self {
        RenderOptions::builder()
            .width(Dimension::Cells(cells))
            .build()
    }
}
