//! Curved-label geometry: the arc the college name renders along.
//!
//! The path keeps fixed endpoints and radius; only the vertical radius (the
//! "depth") is tunable, together with the text size riding the path. Inputs
//! that are absent or fail to parse fall back to the defaults verbatim, so
//! re-applying the same inputs always produces the same path.

/// Default vertical radius of the arc, in path units.
pub const DEFAULT_DEPTH: f64 = 100.0;

/// Default font size of the text on the path, in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 24.0;

/// Tunable parameters of the curved label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcState {
    pub depth: f64,
    pub font_size: f64,
}

impl Default for ArcState {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ArcState {
    /// Recompute the state from raw control values.
    ///
    /// An absent or unparsable input yields the default for that parameter,
    /// not the previous value — the controls always hold the full truth.
    pub fn adjust(depth_raw: Option<&str>, size_raw: Option<&str>) -> Self {
        Self {
            depth: parse_or(depth_raw, DEFAULT_DEPTH),
            font_size: parse_or(size_raw, DEFAULT_FONT_SIZE),
        }
    }

    /// The path description for the current depth.
    ///
    /// Fixed anchors at (50,160) and (550,160), fixed horizontal radius 250,
    /// sweeping clockwise above the baseline.
    pub fn path(&self) -> String {
        format!("M 50,160 A 250,{} 0 0,1 550,160", self.depth)
    }
}

fn parse_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(default)
}
