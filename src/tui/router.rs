//! # Simulated Router
//!
//! Stands in for the host's real navigation: a destination "loads" for a
//! fixed delay, then the router reports it as the current path. Only one
//! navigation is in flight; starting another replaces it.

use log::debug;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SimulatedRouter {
    delay: Duration,
    in_flight: Option<(String, Instant)>,
}

impl SimulatedRouter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: None,
        }
    }

    pub fn navigate(&mut self, path: String, now: Instant) {
        if let Some((previous, _)) = &self.in_flight {
            debug!("Navigation to {} superseded by {}", previous, path);
        }
        self.in_flight = Some((path, now + self.delay));
    }

    pub fn is_navigating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The resolved path, once its load time has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.in_flight {
            Some((_, due)) if now >= *due => self.in_flight.take().map(|(path, _)| path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_after_delay() {
        let start = Instant::now();
        let mut router = SimulatedRouter::new(Duration::from_millis(100));
        router.navigate("/a".to_string(), start);

        assert!(router.is_navigating());
        assert_eq!(router.poll(start + Duration::from_millis(50)), None);
        assert_eq!(
            router.poll(start + Duration::from_millis(100)).as_deref(),
            Some("/a")
        );
        assert!(!router.is_navigating());
        assert_eq!(router.poll(start + Duration::from_millis(500)), None);
    }

    #[test]
    fn test_new_navigation_replaces_in_flight() {
        let start = Instant::now();
        let mut router = SimulatedRouter::new(Duration::from_millis(100));
        router.navigate("/a".to_string(), start);
        router.navigate("/b".to_string(), start + Duration::from_millis(60));

        assert_eq!(router.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            router.poll(start + Duration::from_millis(160)).as_deref(),
            Some("/b")
        );
    }

    #[test]
    fn test_zero_delay_resolves_immediately() {
        let start = Instant::now();
        let mut router = SimulatedRouter::new(Duration::ZERO);
        router.navigate("/".to_string(), start);
        assert_eq!(router.poll(start).as_deref(), Some("/"));
    }
}
