use std::fmt::Debug;

use serde::Deserialize;
use serde::Serialize;

use super::Layout;
use super::Rect;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Where a window should be placed, in absolute pixels
pub struct Placement<W> {
    pub window: W,
    pub rect: Rect,
}

/// Receives the rectangles computed by [`Layout::emit`]
pub trait Placer<W> {
    fn place(&mut self, window: W, rect: Rect);
}

impl<W> Placer<W> for Vec<Placement<W>> {
    fn place(&mut self, window: W, rect: Rect) {
        self.push(Placement { window, rect });
    }
}

impl<W: Copy + PartialEq + Debug> Layout<W> {
    /// Compute the placement of every window within `area`, columns left to
    /// right and rows top to bottom.
    #[must_use]
    pub fn arrange(&self, area: &Rect) -> Vec<Placement<W>> {
        let mut placements = Vec::with_capacity(self.len());
        self.emit(area, &mut placements);
        placements
    }

    /// Hand the placement of every window within `area` to `placer`.
    ///
    /// Extents are rounded individually, so the trailing edge may be off from
    /// the edge of `area` by a few pixels.
    pub fn emit(&self, area: &Rect, placer: &mut impl Placer<W>) {
        let mut left = area.left;
        for column in self.columns() {
            let width = scale(area.right, column.size);

            let mut top = area.top;
            for row in &column.rows {
                let height = scale(area.bottom, row.size);
                placer.place(
                    row.window,
                    Rect {
                        left,
                        top,
                        right: width,
                        bottom: height,
                    },
                );

                top += height;
            }

            left += width;
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale(extent: i32, size: f64) -> i32 {
    (f64::from(extent) * size).round() as i32
}
