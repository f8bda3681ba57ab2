// ABOUTME: Stack orientation and cross-axis alignment types.
// ABOUTME: Shared by the arranger and any host compositor.

use serde::{Deserialize, Serialize};

/// Orientation of a stack of children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cross-axis placement of children within a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

impl Alignment {
    /// Fraction of the free cross-axis space placed before the child
    pub fn factor(self) -> f32 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Center => 0.5,
            Alignment::End => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_the_default() {
        assert_eq!(Alignment::default(), Alignment::Center);
    }

    #[test]
    fn factor_splits_free_space() {
        assert_eq!(Alignment::Start.factor(), 0.0);
        assert_eq!(Alignment::Center.factor(), 0.5);
        assert_eq!(Alignment::End.factor(), 1.0);
    }
}
