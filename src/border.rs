//! Decorative page border: style variants and color.
//!
//! The border element keeps a permanent base class and exactly one style
//! class at a time; switching styles swaps the style class without touching
//! the base. Color is an inline property on the same element.

use crate::style::Rgb;

/// Permanent marker class on the border element.
pub const BORDER_BASE_CLASS: &str = "page-border";

/// The selectable border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Solid,
    Double,
    Dashed,
    Dotted,
    Ridge,
}

impl BorderStyle {
    /// All selectable styles, in presentation order.
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Solid,
        BorderStyle::Double,
        BorderStyle::Dashed,
        BorderStyle::Dotted,
        BorderStyle::Ridge,
    ];

    /// Parse a control value. Unknown values are refused.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "solid" => Some(BorderStyle::Solid),
            "double" => Some(BorderStyle::Double),
            "dashed" => Some(BorderStyle::Dashed),
            "dotted" => Some(BorderStyle::Dotted),
            "ridge" => Some(BorderStyle::Ridge),
            _ => None,
        }
    }

    /// The control value naming this style.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Double => "double",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Ridge => "ridge",
        }
    }

    /// The marker class carried by the border element for this style.
    pub fn class(self) -> &'static str {
        match self {
            BorderStyle::Solid => "border-style-solid",
            BorderStyle::Double => "border-style-double",
            BorderStyle::Dashed => "border-style-dashed",
            BorderStyle::Dotted => "border-style-dotted",
            BorderStyle::Ridge => "border-style-ridge",
        }
    }
}

/// Current border configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderState {
    pub style: BorderStyle,
    pub color: Rgb,
}

impl Default for BorderState {
    fn default() -> Self {
        Self {
            style: BorderStyle::Solid,
            color: Rgb::new(0, 0, 0),
        }
    }
}
