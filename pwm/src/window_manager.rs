use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use color_eyre::Result;
use color_eyre::eyre::anyhow;
use color_eyre::eyre::bail;
use pwm_layouts::Axis;
use pwm_layouts::OperationDirection;
use pwm_layouts::Rect;
use pwm_layouts::Sizing;
use serde::Serialize;

use crate::backend::Backend;
use crate::events::Signals;
use crate::ring::Ring;
use crate::static_config::StaticConfig;
use crate::window::Window;
use crate::workspace::Workspace;

/// Owns every workspace and the registry of managed windows.
#[derive(Debug)]
pub struct WindowManager<B: Backend> {
    pub workspaces: Ring<Workspace>,
    /// Managed window to the index of the workspace it lives on
    managed: HashMap<Window, usize>,
    /// Windows unmapped by us while their workspace is not shown
    hidden: HashSet<Window>,
    focused: Option<Window>,
    border_width: i32,
    resize_delta: f64,
    pub backend: B,
    pub signals: Signals,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct State {
    pub workspaces: Ring<Workspace>,
    pub focused_window: Option<Window>,
    pub managed: BTreeMap<Window, usize>,
}

impl<B: Backend> WindowManager<B> {
    pub fn new(config: &StaticConfig, area: Rect, backend: B) -> Self {
        let mut workspaces = Ring::default();
        workspaces.extend(
            config
                .workspace_names()
                .into_iter()
                .map(|name| Workspace::new(name, area)),
        );

        Self {
            workspaces,
            managed: HashMap::new(),
            hidden: HashSet::new(),
            focused: None,
            border_width: config.border_width(),
            resize_delta: config.resize_delta(),
            backend,
            signals: Signals::default(),
        }
    }

    pub fn state(&self) -> State {
        State {
            workspaces: self.workspaces.clone(),
            focused_window: self.focused,
            managed: self.managed.iter().map(|(w, idx)| (*w, *idx)).collect(),
        }
    }

    pub fn is_managed(&self, window: Window) -> bool {
        self.managed.contains_key(&window)
    }

    pub fn is_hidden(&self, window: Window) -> bool {
        self.hidden.contains(&window)
    }

    pub const fn focused_window(&self) -> Option<Window> {
        self.focused
    }

    pub fn focused_workspace_idx(&self) -> usize {
        self.workspaces.focused_idx()
    }

    pub fn focused_workspace(&self) -> Result<&Workspace> {
        self.workspaces
            .focused()
            .ok_or_else(|| anyhow!("there is no workspace"))
    }

    pub fn focused_workspace_mut(&mut self) -> Result<&mut Workspace> {
        self.workspaces
            .focused_mut()
            .ok_or_else(|| anyhow!("there is no workspace"))
    }

    /// The workspace a managed window lives on
    pub fn workspace_idx_for(&self, window: Window) -> Option<usize> {
        self.managed.get(&window).copied()
    }

    /// Tile a new window on the focused workspace and focus it.
    #[tracing::instrument(skip(self))]
    pub fn manage(&mut self, window: Window) -> Result<()> {
        if self.is_managed(window) {
            return Ok(());
        }

        tracing::info!("managing window");

        let idx = self.focused_workspace_idx();
        self.focused_workspace_mut()?.add_window(window)?;
        self.managed.insert(window, idx);

        window.restore(&mut self.backend)?;
        self.update_focused_workspace()?;
        self.handle_focus(Some(window))
    }

    #[tracing::instrument(skip(self))]
    pub fn unmanage(&mut self, window: Window) -> Result<()> {
        let Some(idx) = self.managed.remove(&window) else {
            return Ok(());
        };

        tracing::info!("unmanaging window");

        self.hidden.remove(&window);
        self.workspaces
            .get_mut(idx)
            .ok_or_else(|| anyhow!("there is no workspace at this index"))?
            .remove_window(window)?;

        if idx == self.focused_workspace_idx() {
            self.update_focused_workspace()?;
        }

        if self.focused == Some(window) {
            let next = self.focused_workspace()?.top_focus_priority();
            self.handle_focus(next)?;
        }

        Ok(())
    }

    /// Move focus to `window`, or clear it if `window` is not managed.
    ///
    /// Windows on other workspaces cannot take focus; requests for them are
    /// ignored. Fires `focus_changed` whenever the focused window changes.
    #[tracing::instrument(skip(self))]
    pub fn handle_focus(&mut self, window: Option<Window>) -> Result<()> {
        let window = window.filter(|w| self.is_managed(*w));
        if let Some(idx) = window.and_then(|w| self.workspace_idx_for(w)) {
            if idx != self.focused_workspace_idx() {
                tracing::debug!("ignoring focus request for a window on another workspace");
                return Ok(());
            }
        }

        if self.focused == window {
            return Ok(());
        }

        if let Some(previous) = self.focused {
            // the previous window may already be gone
            if self.is_managed(previous) {
                previous.focus(&mut self.backend, false)?;
            }
        }

        self.focused = window;

        if let Some(window) = window {
            window.focus(&mut self.backend, true)?;

            if let Some(workspace) = self
                .workspace_idx_for(window)
                .and_then(|idx| self.workspaces.get_mut(idx))
            {
                workspace.raise_focus_priority(window);
            }
        }

        tracing::debug!("focus changed");
        self.signals.focus_changed.fire(&window);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn focus_in_direction(&mut self, direction: OperationDirection) -> Result<()> {
        let Some(focused) = self.focused else {
            return Ok(());
        };

        let target = self
            .focused_workspace()?
            .window_in_direction(focused, direction)?;

        if target != focused {
            self.handle_focus(Some(target))?;
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn move_in_direction(&mut self, direction: OperationDirection) -> Result<()> {
        let Some(focused) = self.focused else {
            return Ok(());
        };

        if self.focused_workspace_mut()?.move_window(focused, direction)? {
            self.update_focused_workspace()?;
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn resize_focused(&mut self, axis: Axis, sizing: Sizing) -> Result<()> {
        let Some(focused) = self.focused else {
            return Ok(());
        };

        let delta = axis.delta(sizing.adjust_by(self.resize_delta));
        if self.focused_workspace_mut()?.resize_window(focused, delta)? {
            self.update_focused_workspace()?;
        }

        Ok(())
    }

    /// Hide the current workspace and show the one at `idx`.
    #[tracing::instrument(skip(self))]
    pub fn focus_workspace(&mut self, idx: usize) -> Result<()> {
        if self.workspaces.get(idx).is_none() {
            bail!("there is no workspace at this index");
        }

        if idx == self.focused_workspace_idx() {
            return Ok(());
        }

        tracing::info!("focusing workspace");

        let previous = self
            .workspaces
            .focused()
            .ok_or_else(|| anyhow!("there is no workspace"))?;
        self.hidden.extend(previous.layout.windows());
        previous.hide(&mut self.backend)?;

        self.workspaces.focus(idx);

        let next = self
            .workspaces
            .focused()
            .ok_or_else(|| anyhow!("there is no workspace"))?;
        for window in next.layout.windows() {
            self.hidden.remove(&window);
        }
        next.restore(&mut self.backend)?;

        self.update_focused_workspace()?;

        let to_focus = self.focused_workspace()?.top_focus_priority();
        self.handle_focus(to_focus)
    }

    /// Move the focused window to the workspace at `idx` without following it.
    #[tracing::instrument(skip(self))]
    pub fn send_to_workspace(&mut self, idx: usize) -> Result<()> {
        let Some(window) = self.focused else {
            return Ok(());
        };

        if self.workspaces.get(idx).is_none() {
            bail!("there is no workspace at this index");
        }

        let source = self
            .workspace_idx_for(window)
            .ok_or_else(|| anyhow!("the focused window is not managed"))?;

        if idx == source {
            return Ok(());
        }

        self.workspaces
            .get_mut(source)
            .ok_or_else(|| anyhow!("there is no workspace at this index"))?
            .remove_window(window)?;

        let added = self
            .workspaces
            .get_mut(idx)
            .ok_or_else(|| anyhow!("there is no workspace at this index"))?
            .add_window(window);

        if let Err(error) = added {
            if let Some(workspace) = self.workspaces.get_mut(source) {
                workspace.add_window(window)?;
            }

            return Err(error);
        }

        self.managed.insert(window, idx);

        if idx == self.focused_workspace_idx() {
            self.hidden.remove(&window);
            window.restore(&mut self.backend)?;
        } else if self.hidden.insert(window) {
            window.hide(&mut self.backend)?;
        }

        self.update_focused_workspace()?;

        let to_focus = self.focused_workspace()?.top_focus_priority();
        self.handle_focus(to_focus)
    }

    /// Re-apply the layout of the focused workspace
    pub fn update_focused_workspace(&mut self) -> Result<()> {
        let workspace = self
            .workspaces
            .focused()
            .ok_or_else(|| anyhow!("there is no workspace"))?;

        workspace.update(&mut self.backend, self.border_width)
    }
}
