#[cfg(test)]
mod window_manager_tests {
    use std::sync::Arc;

    use crossbeam_channel::Receiver;
    use crossbeam_channel::Sender;
    use crossbeam_channel::unbounded;
    use parking_lot::Mutex;
    use pwm::Command;
    use pwm::Message;
    use pwm::RecordingBackend;
    use pwm::State;
    use pwm::StaticConfig;
    use pwm::Window;
    use pwm::WindowManagerEvent;
    use pwm::core::OperationDirection;
    use pwm::core::Rect;
    use pwm::listen_for_messages;
    use pwm::window_manager::WindowManager;

    fn run(messages: Vec<Message>) -> (WindowManager<RecordingBackend>, Vec<State>) {
        let wm = Arc::new(Mutex::new(WindowManager::new(
            &StaticConfig::default(),
            Rect::new(0, 0, 1000, 800),
            RecordingBackend::default(),
        )));

        let (sender, receiver): (Sender<Message>, Receiver<Message>) = unbounded();
        let (responses, replies) = unbounded();
        let listener = listen_for_messages(wm.clone(), receiver, responses);

        for message in messages {
            sender.send(message).unwrap();
        }

        drop(sender);
        listener.join().unwrap();

        let wm = Arc::try_unwrap(wm).unwrap().into_inner();
        (wm, replies.try_iter().collect())
    }

    fn map_request(id: u32) -> Message {
        Message::Event(WindowManagerEvent::MapRequest(Window::from(id)))
    }

    #[test]
    fn test_events_and_commands_are_applied_in_order() {
        let (wm, states) = run(vec![
            map_request(1),
            map_request(2),
            map_request(3),
            Message::Command(Command::MoveWindow(OperationDirection::Right)),
            Message::Command(Command::State),
            Message::Event(WindowManagerEvent::DestroyNotify(Window::from(1))),
        ]);

        assert_eq!(states.len(), 1);
        assert_eq!(states[0].managed.len(), 3);
        assert_eq!(states[0].focused_window, Some(Window::from(3)));

        assert!(!wm.is_managed(Window::from(1)));
        assert_eq!(
            wm.backend.position(Window::from(2)),
            Some(Rect::new(0, 0, 496, 796))
        );
        assert_eq!(
            wm.backend.position(Window::from(3)),
            Some(Rect::new(500, 0, 496, 796))
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_listener() {
        let (wm, _) = run(vec![
            Message::Command(Command::FocusWorkspaceNumber(99)),
            map_request(1),
        ]);

        assert!(wm.is_managed(Window::from(1)));
    }

    #[test]
    fn test_focus_workspace() {
        let (wm, _) = run(vec![
            map_request(1),
            Message::Command(Command::FocusWorkspaceNumber(3)),
            map_request(2),
            Message::Command(Command::FocusWorkspaceNumber(0)),
        ]);

        assert_eq!(wm.focused_workspace_idx(), 0);
        assert_eq!(wm.focused_window(), Some(Window::from(1)));
        assert_eq!(wm.workspace_idx_for(Window::from(2)), Some(3));
        assert!(wm.is_hidden(Window::from(2)));
        assert!(!wm.backend.is_mapped(Window::from(2)));
    }
}
