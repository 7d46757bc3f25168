use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the app loop pulls its events from.
pub enum EventSource {
    Tui(Arc<Mutex<dyn TuiLike>>),
    Scripted(VecDeque<Event>),
}

impl EventSource {
    pub fn tui(tui: Arc<Mutex<dyn TuiLike>>) -> Self {
        EventSource::Tui(tui)
    }

    pub fn scripted(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Scripted(events.into_iter().collect())
    }

    /// Next event, or `None` once the source is exhausted.
    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Tui(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Scripted(queue) => queue.pop_front(),
        }
    }
}
