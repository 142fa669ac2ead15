//! Collects lightweight desktop telemetry so product tweaks can be validated during prototyping.

use daybook_core::{TaskId, ThemeMode};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    ThemeResolved {
        mode: ThemeMode,
        source: &'static str,
    },
    ThemeToggled(ThemeMode),
    TabSelected(&'static str),
    SidebarToggled(bool),
    TaskAdded(TaskId),
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::ThemeResolved { mode, source } => {
                    tracing::debug!(
                        mode = mode.as_str(),
                        source,
                        "desktop telemetry theme resolved"
                    )
                }
                Event::ThemeToggled(mode) => {
                    tracing::debug!(mode = mode.as_str(), "desktop telemetry theme toggled")
                }
                Event::TabSelected(tab) => {
                    tracing::debug!(tab, "desktop telemetry tab selected")
                }
                Event::SidebarToggled(collapsed) => {
                    tracing::debug!(collapsed, "desktop telemetry sidebar toggled")
                }
                Event::TaskAdded(id) => {
                    tracing::debug!(task_id = %id, "desktop telemetry task added")
                }
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_event_counts_when_enabled() {
        let handle = Handle::new();
        handle.record(Event::TabSelected("Search"));
        if handle.is_enabled() {
            assert_eq!(handle.events_len(), 1);
        } else {
            assert_eq!(handle.events_len(), 0);
        }
    }
}
