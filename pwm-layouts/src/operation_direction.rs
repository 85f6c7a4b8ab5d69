use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum OperationDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Axis on which to perform an operation
pub enum Axis {
    /// Horizontal axis (column widths)
    Horizontal,
    /// Vertical axis (row heights)
    Vertical,
}

impl Axis {
    /// Split a signed proportional `delta` into a `(dx, dy)` resize pair.
    #[must_use]
    pub const fn delta(self, delta: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (delta, 0.0),
            Self::Vertical => (0.0, delta),
        }
    }
}
