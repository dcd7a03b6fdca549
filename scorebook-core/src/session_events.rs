use scorebook_types::{PlayId, PlayerId, Side};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PlayerSelected {
        player_id: PlayerId,
    },
    SelectionCleared,
    PlayRecorded {
        play_id: PlayId,
        side: Side,
        points: u32,
    },
    PlayEdited {
        play_id: PlayId,
    },
    PlayDeleted {
        play_id: PlayId,
    },
    Undone,
    Redone,
    RosterChanged {
        side: Side,
    },
}

impl SessionEvent {
    /// Whether the score or play-by-play may look different after this event.
    pub fn touches_log(&self) -> bool {
        matches!(
            self,
            SessionEvent::PlayRecorded { .. }
                | SessionEvent::PlayEdited { .. }
                | SessionEvent::PlayDeleted { .. }
                | SessionEvent::Undone
                | SessionEvent::Redone
        )
    }
}

/// Event handler trait for reacting to session changes
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: &SessionEvent);
}

/// Fans each session event out to every registered handler, in registration order.
#[derive(Default)]
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        events: Rc<RefCell<Vec<SessionEvent>>>,
    }

    impl SessionEventHandler for TestHandler {
        fn handle_event(&mut self, event: &SessionEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_event_bus() {
        let mut bus = SessionEventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        bus.add_handler(Box::new(TestHandler { events: first.clone() }));
        bus.add_handler(Box::new(TestHandler { events: second.clone() }));
        bus.publish(SessionEvent::Undone);
        bus.publish(SessionEvent::SelectionCleared);

        assert_eq!(*first.borrow(), vec![SessionEvent::Undone, SessionEvent::SelectionCleared]);
        assert_eq!(first.borrow().len(), second.borrow().len());
    }

    #[test]
    fn test_touches_log() {
        assert!(SessionEvent::Redone.touches_log());
        assert!(!SessionEvent::RosterChanged { side: Side::Home }.touches_log());
        assert!(!SessionEvent::SelectionCleared.touches_log());
    }
}
