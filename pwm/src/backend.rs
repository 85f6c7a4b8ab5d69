use std::collections::HashMap;
use std::collections::HashSet;

use color_eyre::Result;
use serde::Serialize;

use pwm_layouts::Rect;
use crate::window::Window;

/// The display server as seen by the window manager.
///
/// Implementations translate these requests into protocol calls; the window
/// manager itself never talks to the display server directly.
pub trait Backend {
    /// Move and resize `window`, drawing a border of `border` pixels around it.
    fn configure(&mut self, window: Window, rect: &Rect, border: i32) -> Result<()>;

    fn map(&mut self, window: Window) -> Result<()>;

    fn unmap(&mut self, window: Window) -> Result<()>;

    /// Give (or take away) input focus and the focused border colour.
    fn set_focus(&mut self, window: Window, focused: bool) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum Request {
    Configure {
        window: Window,
        rect: Rect,
        border: i32,
    },
    Map(Window),
    Unmap(Window),
    Focus(Window),
    Unfocus(Window),
}

/// A backend without a display server that keeps every request it receives.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    requests: Vec<Request>,
    positions: HashMap<Window, Rect>,
    mapped: HashSet<Window>,
    focused: Option<Window>,
}

impl RecordingBackend {
    /// Drain the requests received so far.
    pub fn take(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn position(&self, window: Window) -> Option<Rect> {
        self.positions.get(&window).copied()
    }

    pub fn is_mapped(&self, window: Window) -> bool {
        self.mapped.contains(&window)
    }

    pub const fn focused(&self) -> Option<Window> {
        self.focused
    }
}

impl Backend for RecordingBackend {
    fn configure(&mut self, window: Window, rect: &Rect, border: i32) -> Result<()> {
        tracing::trace!("configure {} to {:?}", window, rect);
        self.positions.insert(window, *rect);
        self.requests.push(Request::Configure {
            window,
            rect: *rect,
            border,
        });

        Ok(())
    }

    fn map(&mut self, window: Window) -> Result<()> {
        self.mapped.insert(window);
        self.requests.push(Request::Map(window));
        Ok(())
    }

    fn unmap(&mut self, window: Window) -> Result<()> {
        self.mapped.remove(&window);
        self.requests.push(Request::Unmap(window));
        Ok(())
    }

    fn set_focus(&mut self, window: Window, focused: bool) -> Result<()> {
        if focused {
            self.focused = Some(window);
            self.requests.push(Request::Focus(window));
        } else {
            if self.focused == Some(window) {
                self.focused = None;
            }

            self.requests.push(Request::Unfocus(window));
        }

        Ok(())
    }
}
