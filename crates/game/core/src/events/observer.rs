use std::sync::{Arc, Mutex};

use super::CombatEvent;

/// Fire-and-forget recorder of combat events. Observers cannot influence outcomes.
pub trait CombatObserver {
    fn on_event(&mut self, event: &CombatEvent);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl CombatObserver for NullObserver {
    fn on_event(&mut self, _event: &CombatEvent) {}
}

/// Keeps every event it sees, in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<CombatEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&CombatEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl CombatObserver for EventRecorder {
    fn on_event(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }
}

/// Shared observers, so the caller keeps a handle while the session notifies.
///
/// A poisoned lock drops the event.
impl<T: CombatObserver> CombatObserver for Arc<Mutex<T>> {
    fn on_event(&mut self, event: &CombatEvent) {
        if let Ok(mut inner) = self.lock() {
            inner.on_event(event);
        }
    }
}
