//! Navigation history for the console.

use std::sync::Mutex;

/// "Go back" semantics used by update controllers after a successful save.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn back(&self);
}

/// In-process history stack standing in for the host shell's history.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    stack: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited route.
    pub fn push(&self, route: impl Into<String>) {
        let route = route.into();
        tracing::debug!("Navigating to {}", route);
        self.stack.lock().expect("history lock poisoned").push(route);
    }

    /// The route currently on top of the history, if any.
    pub fn current(&self) -> Option<String> {
        self.stack
            .lock()
            .expect("history lock poisoned")
            .last()
            .cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn back(&self) {
        let mut stack = self.stack.lock().expect("history lock poisoned");
        if let Some(left) = stack.pop() {
            tracing::debug!("Navigating back from {}", left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_pops_history() {
        let nav = HistoryNavigator::new();
        nav.push("book");
        nav.push("book/123/edit");
        assert_eq!(nav.current().as_deref(), Some("book/123/edit"));

        nav.back();
        assert_eq!(nav.current().as_deref(), Some("book"));
    }

    #[test]
    fn test_back_on_empty_history_is_a_noop() {
        let nav = HistoryNavigator::new();
        nav.back();
        assert_eq!(nav.current(), None);
    }
}
