use std::fmt::Display;
use std::fmt::Formatter;

use color_eyre::Result;
use serde::Deserialize;
use serde::Serialize;

use crate::backend::Backend;
use pwm_layouts::Rect;

/// A managed top-level window, identified by the id the display server gave it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Window {
    pub id: u32,
}

impl From<u32> for Window {
    fn from(value: u32) -> Self {
        Self { id: value }
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(id: {:#010x})", self.id)
    }
}

impl Window {
    /// Place the window so that it and its border of `border` pixels cover `layout`.
    pub fn set_position<B: Backend>(
        &self,
        backend: &mut B,
        layout: &Rect,
        border: i32,
    ) -> Result<()> {
        let mut rect = *layout;
        rect.inset_for_border(border);

        backend.configure(*self, &rect, border)
    }

    pub fn hide<B: Backend>(&self, backend: &mut B) -> Result<()> {
        backend.unmap(*self)
    }

    pub fn restore<B: Backend>(&self, backend: &mut B) -> Result<()> {
        backend.map(*self)
    }

    pub fn focus<B: Backend>(&self, backend: &mut B, focused: bool) -> Result<()> {
        backend.set_focus(*self, focused)
    }
}
