pub mod bbox;
pub mod config;
pub mod detection;
pub mod direction;
pub mod error;
pub mod frame;
pub mod report;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use detection::Detection;
pub use direction::DirectionSet;
pub use frame::Frame;
pub use report::{Report, Verdict};

use error::Error;
use nalgebra as na;
use session::Session;
use std::collections::HashMap;
use std::rc::Rc;

/// Bounding-box center in image coordinates, y growing downward.
pub type Position = na::Point2<i32>;

pub trait Monitoring {
    fn update(&mut self, frame: &Frame, src: &str);
    fn reports(&self, src: &str) -> Rc<[Report]>;
}

/// Wrong-direction monitor over any number of video sources.
///
/// Holds one classification session per source name; sessions are created
/// on first sight of a source and share the monitor's configuration.
pub struct ContraflowMonitor {
    config: SessionConfig,
    sessions: HashMap<String, Session>,
}

impl ContraflowMonitor {
    /// Refuses to start on invalid configuration: conformance is undefined
    /// against an empty direction set, and a non-positive threshold makes
    /// the debounce nonsensical.
    pub fn new(config: SessionConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            config,
            sessions: HashMap::new(),
        })
    }
}

impl Monitoring for ContraflowMonitor {
    fn update(&mut self, frame: &Frame, src: &str) {
        let item = self.sessions.get_mut(src);
        let session = if let Some(session) = item {
            session
        } else {
            self.sessions
                .entry(src.to_string())
                .or_insert_with(|| Session::new(self.config.clone()))
        };

        session.observe(frame);
    }

    #[inline]
    fn reports(&self, src: &str) -> Rc<[Report]> {
        if let Some(session) = self.sessions.get(src) {
            return session.reports().to_vec().into_boxed_slice().into();
        }

        Rc::new([])
    }
}
