use std::collections::HashMap;

use tracing::debug;

use crate::Position;

/// Last observed center per track identity.
///
/// At most one entry per identity. Entries are overwritten on every
/// re-observation and removed only by the staleness sweep.
#[derive(Debug, Default)]
pub struct PositionStore {
    entries: HashMap<u32, Entry>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    position: Position,
    last_seen: u64,
}

impl PositionStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: u32) -> Option<Position> {
        self.entries.get(&id).map(|e| e.position)
    }

    #[inline]
    pub fn set(&mut self, id: u32, position: Position, frame_idx: u64) {
        self.entries.insert(
            id,
            Entry {
                position,
                last_seen: frame_idx,
            },
        );
    }

    /// Drops entries the tracker has stopped reporting: anything not
    /// re-observed for more than `max_idle` frames.
    pub fn evict_stale(&mut self, frame_idx: u64, max_idle: u64) {
        self.entries.retain(|id, e| {
            let idle = frame_idx - e.last_seen;
            if idle > max_idle {
                debug!("track {} evicted after {} idle frames", id, idle);
                false
            } else {
                true
            }
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_absent() {
        let store = PositionStore::new();

        assert_eq!(store.get(7), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = PositionStore::new();

        store.set(7, Position::new(50, 50), 1);
        store.set(7, Position::new(52, 53), 2);

        assert_eq!(store.get(7), Some(Position::new(52, 53)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_evict_stale_drops_idle_entries() {
        let mut store = PositionStore::new();

        store.set(1, Position::new(10, 10), 1);
        store.set(2, Position::new(20, 20), 9);
        store.evict_stale(10, 5);

        assert_eq!(store.get(1), None);
        assert_eq!(store.get(2), Some(Position::new(20, 20)));
    }

    #[test]
    fn test_evict_stale_keeps_entry_at_exact_limit() {
        let mut store = PositionStore::new();

        store.set(1, Position::new(10, 10), 5);
        store.evict_stale(10, 5);

        assert_eq!(store.get(1), Some(Position::new(10, 10)));
    }
}
