#![warn(clippy::all)]

pub mod backend;
pub mod events;
pub mod process_command;
pub mod process_event;
pub mod ring;
pub mod static_config;
pub mod window;
pub mod window_manager;
pub mod window_manager_event;
pub mod workspace;

pub use backend::*;
pub use events::*;
pub use process_command::*;
pub use process_event::*;
pub use static_config::*;
pub use window::*;
pub use window_manager::*;
pub use window_manager_event::*;

pub use pwm_layouts as core;

use serde::Deserialize;
use serde::Serialize;

/// One line of input to the window manager
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Message {
    Event(WindowManagerEvent),
    Command(Command),
}
