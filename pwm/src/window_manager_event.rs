use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::window::Window;

/// The display server events the window manager reacts to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "content")]
pub enum WindowManagerEvent {
    /// A client asked for a window to be mapped
    MapRequest(Window),
    MapNotify(Window),
    /// `from_root` is set when the notification was delivered to the root
    /// window through substructure redirection rather than to the window itself
    UnmapNotify {
        window: Window,
        #[serde(default)]
        from_root: bool,
    },
    DestroyNotify(Window),
    /// The pointer entered a window
    EnterNotify(Window),
    PropertyNotify(Window),
}

impl Display for WindowManagerEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowManagerEvent::UnmapNotify { window, from_root } => {
                write!(f, "UnmapNotify (Window: {window}, FromRoot: {from_root})")
            }
            _ => write!(f, "{} (Window: {})", self.title(), self.window()),
        }
    }
}

impl WindowManagerEvent {
    pub const fn window(self) -> Window {
        match self {
            WindowManagerEvent::MapRequest(window)
            | WindowManagerEvent::MapNotify(window)
            | WindowManagerEvent::UnmapNotify { window, .. }
            | WindowManagerEvent::DestroyNotify(window)
            | WindowManagerEvent::EnterNotify(window)
            | WindowManagerEvent::PropertyNotify(window) => window,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            WindowManagerEvent::MapRequest(_) => "MapRequest",
            WindowManagerEvent::MapNotify(_) => "MapNotify",
            WindowManagerEvent::UnmapNotify { .. } => "UnmapNotify",
            WindowManagerEvent::DestroyNotify(_) => "DestroyNotify",
            WindowManagerEvent::EnterNotify(_) => "EnterNotify",
            WindowManagerEvent::PropertyNotify(_) => "PropertyNotify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_events() {
        let event: WindowManagerEvent =
            serde_json::from_str(r#"{"type": "MapRequest", "content": 4194307}"#).unwrap();
        assert_eq!(event, WindowManagerEvent::MapRequest(Window::from(4_194_307)));

        let event: WindowManagerEvent =
            serde_json::from_str(r#"{"type": "UnmapNotify", "content": {"window": 12}}"#)
                .unwrap();
        assert_eq!(
            event,
            WindowManagerEvent::UnmapNotify {
                window: Window::from(12),
                from_root: false
            }
        );
    }

    #[test]
    fn test_display() {
        let event = WindowManagerEvent::EnterNotify(Window::from(1));
        assert_eq!(event.to_string(), "EnterNotify (Window: (id: 0x00000001))");
    }
}
