use std::fmt::Debug;

use serde::Deserialize;
use serde::Serialize;

use super::OperationDirection;
use crate::error::LayoutError;
use crate::error::Result;
use crate::error::SizeGroup;
use crate::geometry::Column;
use crate::geometry::Row;
use crate::geometry::check_sum;
use crate::geometry::distribute_free_space;
use crate::geometry::make_space;
use crate::geometry::resized;

/// Column/row arrangement of the windows on one workspace.
///
/// ```text
/// +-------+-----+-----+
/// |       |     |     |
/// |       +-----+     |
/// |       |     |     |
/// |       +-----+     |
/// |       |     |     |
/// +-------+-----+-----+
/// ```
///
/// Column sizes are shares of the workspace width and row sizes are shares of
/// their column's height. Both always sum to 1.0, and a column is only ever
/// empty when it is the only one left.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Layout<W> {
    columns: Vec<Column<W>>,
}

impl<W> Default for Layout<W> {
    fn default() -> Self {
        Self {
            columns: vec![Column::empty(1.0)],
        }
    }
}

impl<W: Copy + PartialEq + Debug> Layout<W> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column<W>] {
        &self.columns
    }

    /// Number of windows in the layout
    pub fn len(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Column::is_empty)
    }

    /// Windows in placement order: columns left to right, rows top to bottom.
    pub fn windows(&self) -> impl Iterator<Item = W> + '_ {
        self.columns
            .iter()
            .flat_map(|column| column.rows.iter().map(|row| row.window))
    }

    pub fn contains(&self, window: W) -> bool {
        self.windows().any(|w| w == window)
    }

    /// Column and row index of `window`
    pub fn path(&self, window: W) -> Result<(usize, usize)> {
        for (column_idx, column) in self.columns.iter().enumerate() {
            for (row_idx, row) in column.rows.iter().enumerate() {
                if row.window == window {
                    return Ok((column_idx, row_idx));
                }
            }
        }

        Err(not_found(window))
    }

    /// Width share of the window's column and height share of its row
    pub fn size_of(&self, window: W) -> Result<(f64, f64)> {
        let (column_idx, row_idx) = self.path(window)?;
        let column = &self.columns[column_idx];
        Ok((column.size, column.rows[row_idx].size))
    }

    /// Insert `window` into `column` (default: the last one) at `row` (default:
    /// after the last row). A column index past the end opens a new column.
    pub fn add_window(
        &mut self,
        window: W,
        column: Option<usize>,
        row: Option<usize>,
    ) -> Result<()> {
        if self.contains(window) {
            return Err(LayoutError::AlreadyManaged(format!("{window:?}")));
        }

        let column_idx = column.unwrap_or(self.columns.len() - 1);

        if column_idx >= self.columns.len() {
            if self.is_empty() {
                self.columns[0].rows.push(Row::new(1.0, window));
            } else {
                let size = 1.0 / (self.columns.len() + 1) as f64;
                make_space(&mut self.columns, size);
                self.columns.push(Column::with_row(size, Row::new(1.0, window)));
            }
        } else {
            let rows = &mut self.columns[column_idx].rows;
            let row_idx = row.map_or(rows.len(), |row| row.min(rows.len()));
            let size = 1.0 / (rows.len() + 1) as f64;

            make_space(rows, size);
            rows.insert(row_idx, Row::new(size, window));
        }

        tracing::debug!("added window {:?} to column {}", window, column_idx);
        self.debug_validate();

        Ok(())
    }

    pub fn remove_window(&mut self, window: W) -> Result<()> {
        let (column_idx, row_idx) = self.path(window)?;
        self.columns[column_idx].rows.remove(row_idx);

        if self.columns[column_idx].is_empty() {
            // Don't leave empty columns behind
            if self.columns.len() > 1 {
                self.columns.remove(column_idx);
                distribute_free_space(&mut self.columns);
            }
        } else {
            distribute_free_space(&mut self.columns[column_idx].rows);
        }

        tracing::debug!("removed window {:?} from column {}", window, column_idx);
        self.debug_validate();

        Ok(())
    }

    /// Returns whether the layout changed.
    pub fn move_window(&mut self, window: W, direction: OperationDirection) -> Result<bool> {
        match direction {
            OperationDirection::Up => self.move_up(window),
            OperationDirection::Down => self.move_down(window),
            OperationDirection::Left => self.move_left(window),
            OperationDirection::Right => self.move_right(window),
        }
    }

    /// Swap the window with the one above it. The sizes stay where they are.
    pub fn move_up(&mut self, window: W) -> Result<bool> {
        let (column_idx, row_idx) = self.path(window)?;
        if row_idx == 0 {
            return Ok(false);
        }

        let rows = &mut self.columns[column_idx].rows;
        rows[row_idx].window = rows[row_idx - 1].window;
        rows[row_idx - 1].window = window;

        Ok(true)
    }

    pub fn move_down(&mut self, window: W) -> Result<bool> {
        let (column_idx, row_idx) = self.path(window)?;
        match self.columns[column_idx].rows.get(row_idx + 1) {
            Some(below) => {
                let below = below.window;
                self.move_up(below)
            }
            None => Ok(false),
        }
    }

    pub fn move_left(&mut self, window: W) -> Result<bool> {
        self.move_across_columns(window, true)
    }

    pub fn move_right(&mut self, window: W) -> Result<bool> {
        self.move_across_columns(window, false)
    }

    fn move_across_columns(&mut self, window: W, leftwards: bool) -> Result<bool> {
        let (column_idx, row_idx) = self.path(window)?;

        let outermost = if leftwards {
            column_idx == 0
        } else {
            column_idx == self.columns.len() - 1
        };

        // Already alone at the edge, there is nowhere to go
        if outermost && self.columns[column_idx].len() == 1 {
            return Ok(false);
        }

        let mut row = self.columns[column_idx].rows.remove(row_idx);
        if !self.columns[column_idx].is_empty() {
            distribute_free_space(&mut self.columns[column_idx].rows);
        }

        if outermost {
            // Sharing an edge column: split off into a new column at the edge
            row.size = 1.0;
            let size = 1.0 / (self.columns.len() + 1) as f64;
            make_space(&mut self.columns, size);

            let target_idx = if leftwards { 0 } else { self.columns.len() };
            self.columns.insert(target_idx, Column::with_row(size, row));
        } else {
            let target_idx = if leftwards {
                column_idx - 1
            } else {
                column_idx + 1
            };

            let target = &mut self.columns[target_idx].rows;
            row.size = 1.0 / (target.len() + 1) as f64;
            make_space(target, row.size);
            target.push(row);

            if self.columns[column_idx].is_empty() {
                self.columns.remove(column_idx);
                distribute_free_space(&mut self.columns);
            }
        }

        tracing::debug!(
            "moved window {:?} {} out of column {}",
            window,
            if leftwards { "left" } else { "right" },
            column_idx
        );
        self.debug_validate();

        Ok(true)
    }

    /// Change the width share of the window's column by `dx` and the height
    /// share of its row by `dy`. An axis without a sibling to absorb the change
    /// is left alone. Returns whether the layout changed.
    pub fn resize(&mut self, window: W, delta: (f64, f64)) -> Result<bool> {
        let (column_idx, row_idx) = self.path(window)?;
        let (dx, dy) = delta;
        let mut changed = false;

        if dx != 0.0 && self.columns.len() > 1 {
            let size = resized(self.columns[column_idx].size, dx);
            if size != self.columns[column_idx].size {
                let mut column = self.columns.remove(column_idx);
                column.size = size;

                distribute_free_space(&mut self.columns);
                make_space(&mut self.columns, column.size);
                self.columns.insert(column_idx, column);
                changed = true;
            }
        }

        let rows = &mut self.columns[column_idx].rows;
        if dy != 0.0 && rows.len() > 1 {
            let size = resized(rows[row_idx].size, dy);
            if size != rows[row_idx].size {
                let mut row = rows.remove(row_idx);
                row.size = size;

                distribute_free_space(rows);
                make_space(rows, row.size);
                rows.insert(row_idx, row);
                changed = true;
            }
        }

        if changed {
            tracing::debug!("resized window {:?} by ({}, {})", window, dx, dy);
            self.debug_validate();
        }

        Ok(changed)
    }

    /// The window next to `window` in `direction`, or `window` itself at the
    /// edge. Moving across columns keeps the row index where the neighbouring
    /// column has enough rows, and lands on its last row otherwise.
    pub fn window_in_direction(&self, window: W, direction: OperationDirection) -> Result<W> {
        let (column_idx, row_idx) = self.path(window)?;
        let rows = &self.columns[column_idx].rows;

        let neighbour = match direction {
            OperationDirection::Up => row_idx.checked_sub(1).and_then(|idx| rows.get(idx)),
            OperationDirection::Down => rows.get(row_idx + 1),
            OperationDirection::Left => column_idx
                .checked_sub(1)
                .and_then(|idx| self.columns.get(idx))
                .and_then(|column| column.rows.get(row_idx.min(column.len().saturating_sub(1)))),
            OperationDirection::Right => self
                .columns
                .get(column_idx + 1)
                .and_then(|column| column.rows.get(row_idx.min(column.len().saturating_sub(1)))),
        };

        Ok(neighbour.map_or(window, |row| row.window))
    }

    /// Check every structural and size invariant of the layout.
    pub fn validate(&self) -> Result<()> {
        check_sum(&self.columns, SizeGroup::Columns)?;

        for (idx, column) in self.columns.iter().enumerate() {
            if column.is_empty() {
                if self.columns.len() > 1 {
                    return Err(LayoutError::EmptyColumn(idx));
                }

                continue;
            }

            check_sum(&column.rows, SizeGroup::Rows { column: idx })?;
        }

        let windows: Vec<W> = self.windows().collect();
        for (idx, window) in windows.iter().enumerate() {
            if windows[..idx].contains(window) {
                return Err(LayoutError::DuplicateWindow(format!("{window:?}")));
            }
        }

        Ok(())
    }

    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(error) = self.validate() {
            panic!("layout invariant violated: {error}");
        }
    }
}

fn not_found<W: Debug>(window: W) -> LayoutError {
    LayoutError::WindowNotFound(format!("{window:?}"))
}
