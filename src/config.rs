use crate::direction::DirectionSet;
use crate::error::Error;

/// Session-scoped settings, fixed once a monitor is constructed.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Minimum per-axis displacement in pixels before a movement is
    /// classified at all; anything smaller is tracker jitter.
    pub movement_threshold: i32,
    /// Directions considered correct travel for the monitored viewpoint.
    pub directions: DirectionSet,
    /// Evict a track's stored position after this many frames without a
    /// re-observation. `None` keeps every entry for the whole session.
    pub stale_after: Option<u64>,
}

impl SessionConfig {
    pub fn new(directions: DirectionSet) -> Self {
        Self {
            movement_threshold: 5,
            directions,
            stale_after: None,
        }
    }

    // A non-empty direction set is guaranteed by DirectionSet itself.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.movement_threshold <= 0 {
            return Err(Error::InvalidThreshold(self.movement_threshold));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new(DirectionSet::incoming());

        assert_eq!(config.movement_threshold, 5);
        assert_eq!(config.stale_after, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_threshold_is_rejected() {
        let mut config = SessionConfig::new(DirectionSet::incoming());

        config.movement_threshold = 0;
        assert_eq!(config.validate(), Err(Error::InvalidThreshold(0)));

        config.movement_threshold = -5;
        assert_eq!(config.validate(), Err(Error::InvalidThreshold(-5)));
    }
}
