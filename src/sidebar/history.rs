//! Linear history stack emulating the browser's `pushState`/`popstate` pair.
//!
//! Each entry carries the address-bar URL plus the state object the widget
//! attaches to it: the root-relative fragment path, or nothing when the
//! panel is closed.

/// One entry in the emulated browser history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// What the address bar shows while this entry is current.
    pub url: String,
    /// Root-relative fragment path carried as the entry's state, absent for
    /// closed-panel entries.
    pub sidebar_url: Option<String>,
}

pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
    idx: usize,
}

impl HistoryStack {
    /// Start at the page's load URL with no attached state.
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.to_string(),
                sidebar_url: None,
            }],
            idx: 0,
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.idx]
    }

    /// The address bar always shows the current entry's URL.
    pub fn address_bar(&self) -> &str {
        &self.current().url
    }

    /// `pushState`: truncate forward entries, then push without navigating.
    pub fn push_state(&mut self, sidebar_url: Option<String>, url: &str) {
        self.entries.truncate(self.idx + 1);
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            sidebar_url,
        });
        self.idx = self.entries.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.idx > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.idx + 1 < self.entries.len()
    }

    /// Move one step back and return the now-current entry (the `popstate`
    /// payload). `None` at the start of history.
    pub fn back(&mut self) -> Option<HistoryEntry> {
        if self.idx == 0 {
            return None;
        }
        self.idx -= 1;
        Some(self.current().clone())
    }

    /// Move one step forward and return the now-current entry.
    pub fn forward(&mut self) -> Option<HistoryEntry> {
        if self.idx + 1 >= self.entries.len() {
            return None;
        }
        self.idx += 1;
        Some(self.current().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_stateless_entry() {
        let history = HistoryStack::new("/docs/intro");
        assert_eq!(history.address_bar(), "/docs/intro");
        assert_eq!(history.current().sidebar_url, None);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn push_state_updates_address_without_navigating() {
        let mut history = HistoryStack::new("/docs/intro");
        history.push_state(
            Some("/learning-center/".into()),
            "/docs/intro?sidebar=learning-center/",
        );
        assert_eq!(history.address_bar(), "/docs/intro?sidebar=learning-center/");
        assert_eq!(
            history.current().sidebar_url.as_deref(),
            Some("/learning-center/")
        );
        assert!(history.can_go_back());
    }

    #[test]
    fn push_truncates_forward_entries() {
        let mut history = HistoryStack::new("/docs/intro");
        history.push_state(Some("/a".into()), "/docs/intro?sidebar=a");
        history.push_state(Some("/b".into()), "/docs/intro?sidebar=b");
        history.back().unwrap();
        assert!(history.can_go_forward());

        history.push_state(Some("/c".into()), "/docs/intro?sidebar=c");
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 3);
        assert_eq!(history.address_bar(), "/docs/intro?sidebar=c");
    }

    #[test]
    fn back_and_forward_walk_entries() {
        let mut history = HistoryStack::new("/docs/intro");
        history.push_state(Some("/a".into()), "/docs/intro?sidebar=a");

        let entry = history.back().unwrap();
        assert_eq!(entry.url, "/docs/intro");
        assert_eq!(entry.sidebar_url, None);
        assert!(history.back().is_none());

        let entry = history.forward().unwrap();
        assert_eq!(entry.sidebar_url.as_deref(), Some("/a"));
        assert!(history.forward().is_none());
    }
}
