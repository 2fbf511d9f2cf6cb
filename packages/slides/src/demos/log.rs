use std::collections::VecDeque;

/// A short, numbered event log for demos that show *when* things happen.
///
/// Only the most recent `capacity` entries are kept. Numbering keeps counting past evicted
/// entries so the order is still visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    entries: VecDeque<(u32, String)>,
    next: u32,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            next: 1,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((self.next, entry.into()));
        self.next += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next = 1;
    }

    /// Entries, oldest first, with their sequence numbers.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(n, entry)| (*n, entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_latest_entries() {
        let mut log = EventLog::new(2);
        log.push("mount");
        log.push("effect");
        log.push("cleanup");

        let entries: Vec<_> = log.iter().collect();
        assert_eq!(entries, [(2, "effect"), (3, "cleanup")]);
    }

    #[test]
    fn clearing_restarts_numbering() {
        let mut log = EventLog::default();
        log.push("a");
        log.clear();
        log.push("b");

        assert_eq!(log.iter().collect::<Vec<_>>(), [(1, "b")]);
        assert_eq!(log.len(), 1);
    }
}
