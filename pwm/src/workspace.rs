use std::collections::VecDeque;
use std::fmt::Display;
use std::fmt::Formatter;

use color_eyre::Result;
use pwm_layouts::Layout;
use pwm_layouts::OperationDirection;
use pwm_layouts::Rect;
use serde::Deserialize;
use serde::Serialize;

use crate::backend::Backend;
use crate::window::Window;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Workspace {
    pub name: Option<String>,
    /// Absolute position and size of the tiling area
    pub area: Rect,
    pub layout: Layout<Window>,
    /// Most recently focused first
    focus_priority: VecDeque<Window>,
}

impl Display for Workspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Workspace ({name})"),
            None => write!(f, "Workspace"),
        }
    }
}

impl Workspace {
    pub fn new(name: Option<String>, area: Rect) -> Self {
        Self {
            name,
            area,
            layout: Layout::new(),
            focus_priority: VecDeque::new(),
        }
    }

    pub fn contains_window(&self, window: Window) -> bool {
        self.layout.contains(window)
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Tile `window` at the end of the last column
    pub fn add_window(&mut self, window: Window) -> Result<()> {
        self.layout.add_window(window, None, None)?;
        self.focus_priority.push_back(window);

        Ok(())
    }

    pub fn remove_window(&mut self, window: Window) -> Result<()> {
        self.layout.remove_window(window)?;
        self.focus_priority.retain(|w| *w != window);

        Ok(())
    }

    pub fn move_window(&mut self, window: Window, direction: OperationDirection) -> Result<bool> {
        Ok(self.layout.move_window(window, direction)?)
    }

    pub fn resize_window(&mut self, window: Window, delta: (f64, f64)) -> Result<bool> {
        Ok(self.layout.resize(window, delta)?)
    }

    pub fn window_in_direction(
        &self,
        window: Window,
        direction: OperationDirection,
    ) -> Result<Window> {
        Ok(self.layout.window_in_direction(window, direction)?)
    }

    /// The window that should receive focus when the focused one goes away
    pub fn top_focus_priority(&self) -> Option<Window> {
        self.focus_priority.front().copied()
    }

    pub fn raise_focus_priority(&mut self, window: Window) {
        if !self.contains_window(window) {
            return;
        }

        self.focus_priority.retain(|w| *w != window);
        self.focus_priority.push_front(window);
    }

    /// Push the current arrangement out to every window on this workspace.
    pub fn update<B: Backend>(&self, backend: &mut B, border: i32) -> Result<()> {
        for placement in self.layout.arrange(&self.area) {
            placement
                .window
                .set_position(backend, &placement.rect, border)?;
        }

        Ok(())
    }

    pub fn hide<B: Backend>(&self, backend: &mut B) -> Result<()> {
        for window in self.layout.windows() {
            window.hide(backend)?;
        }

        Ok(())
    }

    pub fn restore<B: Backend>(&self, backend: &mut B) -> Result<()> {
        for window in self.layout.windows() {
            window.restore(backend)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;

    fn test_workspace(windows: &[u32]) -> Workspace {
        let mut workspace = Workspace::new(None, Rect::new(0, 0, 1000, 800));
        for id in windows {
            workspace.add_window(Window::from(*id)).unwrap();
        }

        workspace
    }

    #[test]
    fn test_focus_priority_follows_raises() {
        let mut workspace = test_workspace(&[1, 2, 3]);
        assert_eq!(workspace.top_focus_priority(), Some(Window::from(1)));

        workspace.raise_focus_priority(Window::from(3));
        assert_eq!(workspace.top_focus_priority(), Some(Window::from(3)));

        workspace.remove_window(Window::from(3)).unwrap();
        assert_eq!(workspace.top_focus_priority(), Some(Window::from(1)));
    }

    #[test]
    fn test_raise_ignores_foreign_windows() {
        let mut workspace = test_workspace(&[1]);
        workspace.raise_focus_priority(Window::from(9));

        assert_eq!(workspace.top_focus_priority(), Some(Window::from(1)));
    }

    #[test]
    fn test_update_applies_border_inset() {
        let workspace = test_workspace(&[1, 2]);
        let mut backend = RecordingBackend::default();

        workspace.update(&mut backend, 2).unwrap();

        assert_eq!(
            backend.position(Window::from(1)),
            Some(Rect::new(0, 0, 996, 396))
        );
        assert_eq!(
            backend.position(Window::from(2)),
            Some(Rect::new(0, 400, 996, 396))
        );
    }

    #[test]
    fn test_hide_and_restore() {
        let workspace = test_workspace(&[1, 2]);
        let mut backend = RecordingBackend::default();

        workspace.restore(&mut backend).unwrap();
        assert!(backend.is_mapped(Window::from(1)));

        workspace.hide(&mut backend).unwrap();
        assert!(!backend.is_mapped(Window::from(1)));
        assert!(!backend.is_mapped(Window::from(2)));
    }
}
