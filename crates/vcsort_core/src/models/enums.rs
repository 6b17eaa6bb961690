//! Presentation enums.

use serde::{Deserialize, Serialize};

/// How the ranked list is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One item per row, top to bottom.
    #[default]
    Vertical,
    /// Items flow left to right and wrap.
    Horizontal,
}

impl LayoutMode {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Vertical => LayoutMode::Horizontal,
            LayoutMode::Horizontal => LayoutMode::Vertical,
        }
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMode::Vertical => write!(f, "vertical"),
            LayoutMode::Horizontal => write!(f, "horizontal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_layouts() {
        assert_eq!(LayoutMode::Vertical.toggled(), LayoutMode::Horizontal);
        assert_eq!(LayoutMode::Horizontal.toggled(), LayoutMode::Vertical);
        assert_eq!(LayoutMode::default(), LayoutMode::Vertical);
    }
}
