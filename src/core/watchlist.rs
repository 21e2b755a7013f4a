//! Watch list - the fixed set of process names treated as recording software

use std::collections::HashSet;

/// Process names considered recording or conferencing software.
pub const DEFAULT_WATCH_LIST: &[&str] = &["obs64.exe", "camtasia.exe", "zoom.exe", "teams.exe"];

/// Immutable, ordered list of watched process names.
///
/// The order is fixed at construction; detection results always follow it,
/// never the order the OS happens to report processes in.
#[derive(Debug, Clone)]
pub struct WatchList {
    entries: Vec<String>,
}

impl WatchList {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The watched process names, in configured order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ordered intersection with a process snapshot.
    ///
    /// Matching is a case-sensitive exact comparison on the executable name.
    pub fn matches(&self, snapshot: &HashSet<String>) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| snapshot.contains(entry.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for WatchList {
    fn default() -> Self {
        Self::new(DEFAULT_WATCH_LIST.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn single_match() {
        let watch = WatchList::new(["a", "b", "c"]);
        assert_eq!(watch.matches(&snapshot(&["b"])), vec!["b"]);
    }

    #[test]
    fn empty_snapshot_matches_nothing() {
        let watch = WatchList::new(["a", "b", "c"]);
        assert!(watch.matches(&snapshot(&[])).is_empty());
    }

    #[test]
    fn result_follows_watch_list_order() {
        let watch = WatchList::new(["a", "b", "c"]);
        // Snapshot order is irrelevant; the result is ordered by the list.
        assert_eq!(watch.matches(&snapshot(&["c", "a"])), vec!["a", "c"]);
    }

    #[test]
    fn unwatched_processes_are_ignored() {
        let watch = WatchList::new(["obs64.exe"]);
        let snap = snapshot(&["explorer.exe", "obs64.exe", "firefox.exe"]);
        assert_eq!(watch.matches(&snap), vec!["obs64.exe"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let watch = WatchList::default();
        assert!(watch.matches(&snapshot(&["OBS64.EXE", "Zoom.exe"])).is_empty());
    }

    #[test]
    fn default_list_contents() {
        let watch = WatchList::default();
        assert_eq!(
            watch.entries(),
            &["obs64.exe", "camtasia.exe", "zoom.exe", "teams.exe"]
        );
    }
}
