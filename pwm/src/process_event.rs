use std::sync::Arc;
use std::thread::JoinHandle;

use color_eyre::Result;
use crossbeam_channel::Receiver;
use crossbeam_channel::Sender;
use parking_lot::Mutex;

use crate::Message;
use crate::backend::Backend;
use crate::window_manager::State;
use crate::window_manager::WindowManager;
use crate::window_manager_event::WindowManagerEvent;

/// Apply messages from `receiver` until every sender is dropped.
///
/// Snapshots produced by `State` commands are sent to `responses`.
pub fn listen_for_messages<B>(
    wm: Arc<Mutex<WindowManager<B>>>,
    receiver: Receiver<Message>,
    responses: Sender<State>,
) -> JoinHandle<()>
where
    B: Backend + Send + 'static,
{
    std::thread::spawn(move || {
        tracing::info!("listening");

        for message in receiver {
            let mut guard = wm.lock();
            let result = match message {
                Message::Event(event) => guard.process_event(event),
                Message::Command(command) => guard.process_command(command).map(|state| {
                    if let Some(state) = state {
                        if responses.send(state).is_err() {
                            tracing::warn!("nobody is listening for state responses");
                        }
                    }
                }),
            };

            if let Err(error) = result {
                if cfg!(debug_assertions) {
                    tracing::error!("{:?}", error)
                } else {
                    tracing::error!("{}", error)
                }
            }
        }

        tracing::info!("all senders have disconnected");
    })
}

impl<B: Backend> WindowManager<B> {
    #[tracing::instrument(skip(self, event), fields(event = event.title(), window = %event.window()))]
    pub fn process_event(&mut self, event: WindowManagerEvent) -> Result<()> {
        match event {
            WindowManagerEvent::MapRequest(window) => {
                self.manage(window)?;
            }
            WindowManagerEvent::MapNotify(window) => {
                if self.is_managed(window) {
                    self.handle_focus(Some(window))?;
                }
            }
            WindowManagerEvent::UnmapNotify { window, from_root } => {
                // the root copy of the notification duplicates the window's own
                if from_root {
                    return Ok(());
                }

                // we unmapped it ourselves when its workspace was hidden
                if self.is_hidden(window) {
                    tracing::trace!("ignoring unmap of hidden window");
                    return Ok(());
                }

                if self.is_managed(window) {
                    self.unmanage(window)?;
                    self.signals.window_unmapped.fire(&window);
                }
            }
            WindowManagerEvent::DestroyNotify(window) => {
                if self.is_managed(window) {
                    self.unmanage(window)?;
                    self.signals.window_unmapped.fire(&window);
                } else {
                    tracing::debug!("window not found");
                }
            }
            WindowManagerEvent::EnterNotify(window) => {
                if self.is_managed(window) {
                    self.handle_focus(Some(window))?;
                }
            }
            WindowManagerEvent::PropertyNotify(window) => {
                if self.is_managed(window) {
                    self.signals.window_property_changed.fire(&window);
                }
            }
        }

        tracing::trace!("processed");

        Ok(())
    }
}
