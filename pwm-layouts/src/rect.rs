use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Eq, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Rectangle dimensions
pub struct Rect {
    /// Left point of the rectangle
    pub left: i32,
    /// Top point of the rectangle
    pub top: i32,
    /// Width of the rectangle (from the left point)
    pub right: i32,
    /// Height of the rectangle (from the top point)
    pub bottom: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Shrink the width and height of self so that a border of `border` pixels drawn
    /// around the outside still fits in the original extent. The origin is unchanged.
    pub fn inset_for_border(&mut self, border: i32) {
        self.right -= border * 2;
        self.bottom -= border * 2;
    }
}
