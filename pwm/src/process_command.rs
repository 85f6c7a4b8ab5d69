use color_eyre::Result;
use pwm_layouts::Axis;
use pwm_layouts::OperationDirection;
use pwm_layouts::Sizing;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;

use crate::backend::Backend;
use crate::window::Window;
use crate::window_manager::State;
use crate::window_manager::WindowManager;

/// Requests from the user, usually bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "content")]
pub enum Command {
    FocusWindow(OperationDirection),
    MoveWindow(OperationDirection),
    ResizeAxis(Axis, Sizing),
    FocusWorkspaceNumber(usize),
    SendToWorkspaceNumber(usize),
    Manage(Window),
    Unmanage(Window),
    /// Reply with a snapshot of the window manager
    State,
}

impl<B: Backend> WindowManager<B> {
    #[tracing::instrument(skip(self))]
    pub fn process_command(&mut self, command: Command) -> Result<Option<State>> {
        match command {
            Command::FocusWindow(direction) => self.focus_in_direction(direction)?,
            Command::MoveWindow(direction) => self.move_in_direction(direction)?,
            Command::ResizeAxis(axis, sizing) => self.resize_focused(axis, sizing)?,
            Command::FocusWorkspaceNumber(idx) => self.focus_workspace(idx)?,
            Command::SendToWorkspaceNumber(idx) => self.send_to_workspace(idx)?,
            Command::Manage(window) => self.manage(window)?,
            Command::Unmanage(window) => self.unmanage(window)?,
            Command::State => return Ok(Some(self.state())),
        }

        tracing::info!("processed");

        Ok(None)
    }
}
