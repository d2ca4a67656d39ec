//! Cosmetic driver movement for the tracking screen.

use std::f64::consts::PI;

pub const PROGRESS_START: u8 = 30;
pub const PROGRESS_END: u8 = 90;
pub const PROGRESS_STEP: u8 = 5;

/// How far along the route the truck marker is, in percent of map width.
/// Cycles 30, 35, .., 90, 30, ..
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingProgress(u8);

impl Default for TrackingProgress {
    fn default() -> Self {
        Self(PROGRESS_START)
    }
}

impl TrackingProgress {
    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = PROGRESS_START;
    }

    pub fn advance(&mut self) {
        self.0 = if self.0 >= PROGRESS_END {
            PROGRESS_START
        } else {
            self.0 + PROGRESS_STEP
        };
    }

    /// Marker position as (x, y) percentages, y measured from the top of
    /// the map. The route arcs upward between the two endpoints.
    pub fn marker_position(&self) -> (f64, f64) {
        let p = f64::from(self.0);
        let y = 50.0 - ((p - 10.0) / 80.0 * PI).sin() * 40.0;
        (p, y)
    }
}

/// Points along the drawn route, same curve the marker follows
pub fn route_points(samples: usize) -> Vec<(f64, f64)> {
    (0..=samples)
        .map(|i| {
            let x = 10.0 + 80.0 * i as f64 / samples.max(1) as f64;
            let y = 50.0 - ((x - 10.0) / 80.0 * PI).sin() * 40.0;
            (x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_in_steps_of_five() {
        let mut progress = TrackingProgress::default();
        assert_eq!(progress.value(), 30);
        progress.advance();
        assert_eq!(progress.value(), 35);
    }

    #[test]
    fn wraps_after_ninety() {
        let mut progress = TrackingProgress::default();
        let mut seen = Vec::new();
        for _ in 0..14 {
            seen.push(progress.value());
            progress.advance();
        }
        assert_eq!(seen[12], 90);
        assert_eq!(seen[13], 30);
        assert!(seen.iter().all(|v| (30..=90).contains(v)));
    }

    #[test]
    fn marker_sits_on_arc() {
        let (x, y) = TrackingProgress(50).marker_position();
        assert_eq!(x, 50.0);
        // sin(pi/2) = 1 at the midpoint of the route
        assert!((y - 10.0).abs() < 1e-9);

        let (_, y) = TrackingProgress(90).marker_position();
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn route_spans_both_endpoints() {
        let route = route_points(8);
        assert_eq!(route.len(), 9);
        assert_eq!(route[0], (10.0, 50.0));
        assert!((route[8].0 - 90.0).abs() < 1e-9);
    }
}
