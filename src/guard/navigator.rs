//! Navigation seam used by the guard to redirect.

/// Something that can move the user to another route.
pub trait Navigator {
    /// Navigate to `path`, replacing the current history entry so that going
    /// back does not return to the page that redirected.
    fn replace(&mut self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn replace(&mut self, path: &str) {
        (**self).replace(path)
    }
}

/// In-process history stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryNavigator {
    entries: Vec<String>,
}

impl HistoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![start.into()],
        }
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Go back one entry. Returns the new current path.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
        self.current()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for HistoryNavigator {
    fn replace(&mut self, path: &str) {
        match self.entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => self.entries.push(path.to_string()),
        }
    }
}
