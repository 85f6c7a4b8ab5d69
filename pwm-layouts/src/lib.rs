#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::use_self, clippy::doc_markdown)]

//! Layout engine for the pwm window manager.
//!
//! This crate maintains the column/row arrangement of the windows on a workspace
//! and turns it into pixel rectangles. It performs no I/O; placing the windows on
//! screen is left to whoever consumes the [`Placement`]s.

pub mod arrangement;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod operation_direction;
pub mod rect;
pub mod sizing;

pub use arrangement::*;
pub use error::LayoutError;
pub use geometry::*;
pub use layout::*;
pub use operation_direction::*;
pub use rect::*;
pub use sizing::*;
