use nalgebra as na;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::frame::Frame;
use crate::report::{Report, Verdict};
use crate::store::PositionStore;

/// Classification state for one video source.
///
/// Owns the position store and consumes frames strictly in arrival order.
/// Each identified detection is tested against the stored previous center
/// of its track, and the store is updated with the new center whether or
/// not a verdict came out of the test.
pub struct Session {
    config: SessionConfig,
    store: PositionStore,
    frame_idx: u64,
    reports: Vec<Report>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        debug!(
            "session started, {} permitted directions, threshold {}px",
            config.directions.len(),
            config.movement_threshold
        );

        Self {
            config,
            store: PositionStore::new(),
            frame_idx: 0,
            reports: Vec::new(),
        }
    }

    /// Runs the store -> displacement -> debounce -> direction pipeline
    /// over one frame of detections.
    pub fn observe(&mut self, frame: &Frame) {
        self.frame_idx += 1;
        self.reports.clear();

        for det in frame.iter() {
            // Unassociated detections cannot be attributed to a history.
            let id = match det.track_id {
                Some(id) => id,
                None => continue,
            };

            let position = det.center();

            if let Some(prev) = self.store.get(id) {
                let movement = position - prev;

                if let Some(verdict) = self.classify(movement) {
                    if verdict == Verdict::WrongDirection {
                        info!(
                            "track {} moving against permitted directions, ({}, {})",
                            id, movement.x, movement.y
                        );
                    }

                    self.reports.push(Report {
                        track_id: id,
                        position,
                        class: det.class,
                        verdict,
                    });
                }
            }

            self.store.set(id, position, self.frame_idx);
        }

        if let Some(max_idle) = self.config.stale_after {
            self.store.evict_stale(self.frame_idx, max_idle);
        }
    }

    /// Debounce plus direction test. `None` means the movement stayed
    /// under the threshold on both axes and is treated as noise.
    fn classify(&self, movement: na::Vector2<i32>) -> Option<Verdict> {
        let threshold = self.config.movement_threshold;

        if movement.x.abs() < threshold && movement.y.abs() < threshold {
            return None;
        }

        if self.config.directions.conforms(movement) {
            Some(Verdict::Conforming)
        } else {
            Some(Verdict::WrongDirection)
        }
    }

    /// Verdicts produced by the most recent frame.
    #[inline]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}
