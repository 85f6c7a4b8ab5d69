use serde::Deserialize;
use serde::Serialize;

use crate::error::LayoutError;
use crate::error::Result;
use crate::error::SizeGroup;

/// Allowed drift of a sibling group's total away from 1.0
pub const TOLERANCE: f64 = 1e-9;

/// Smallest proportional size a resize may leave a column or row with
pub const MIN_SIZE: f64 = 0.05;

/// Largest proportional size a resize may give a column or row
pub const MAX_SIZE: f64 = 0.95;

/// A member of a sibling group whose sizes sum to 1.0
pub trait Proportional {
    fn size(&self) -> f64;
    fn set_size(&mut self, size: f64);
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A window entry: a share of its column's height
pub struct Row<W> {
    pub size: f64,
    pub window: W,
}

impl<W> Row<W> {
    pub const fn new(size: f64, window: W) -> Self {
        Self { size, window }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A share of the workspace width, split top to bottom into rows
pub struct Column<W> {
    pub size: f64,
    pub rows: Vec<Row<W>>,
}

impl<W> Column<W> {
    pub const fn empty(size: f64) -> Self {
        Self { size, rows: vec![] }
    }

    pub fn with_row(size: f64, row: Row<W>) -> Self {
        Self {
            size,
            rows: vec![row],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<W> Proportional for Row<W> {
    fn size(&self) -> f64 {
        self.size
    }

    fn set_size(&mut self, size: f64) {
        self.size = size;
    }
}

impl<W> Proportional for Column<W> {
    fn size(&self) -> f64 {
        self.size
    }

    fn set_size(&mut self, size: f64) {
        self.size = size;
    }
}

/// Shrink every member by the factor `1 - amount`, freeing exactly `amount` of
/// the group's space for a member about to be inserted.
pub fn make_space<T: Proportional>(group: &mut [T], amount: f64) {
    for member in group.iter_mut() {
        member.set_size(member.size() - member.size() * amount);
    }
}

/// Hand out whatever the group is missing (or has in excess) of 1.0 to the
/// members, proportionally to their current sizes.
///
/// Must not be called on an empty group.
pub fn distribute_free_space<T: Proportional>(group: &mut [T]) {
    debug_assert!(!group.is_empty(), "cannot distribute space over nothing");

    let total = total(group);
    if total <= 0.0 {
        return;
    }

    let amount = 1.0 - total;
    for member in group.iter_mut() {
        member.set_size(member.size() + amount * member.size() / total);
    }
}

/// `size` moved by `delta`, stopping at [`MIN_SIZE`] when shrinking and at
/// [`MAX_SIZE`] when growing. A size already past that bound stays put.
pub fn resized(size: f64, delta: f64) -> f64 {
    let target = size + delta;
    if delta < 0.0 {
        target.max(MIN_SIZE.min(size))
    } else {
        target.min(MAX_SIZE.max(size))
    }
}

pub fn total<T: Proportional>(group: &[T]) -> f64 {
    group.iter().map(Proportional::size).sum()
}

/// Fails with [`LayoutError::InvariantViolation`] when the group does not sum to 1.0
pub fn check_sum<T: Proportional>(group: &[T], which: SizeGroup) -> Result<()> {
    let sum = total(group);
    if (sum - 1.0).abs() > TOLERANCE {
        return Err(LayoutError::InvariantViolation { group: which, sum });
    }

    Ok(())
}
