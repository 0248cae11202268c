use crate::config::Config;
use glam::Vec2;
use std::collections::VecDeque;

/// Tracks the raw pointer, an exponentially-smoothed pointer position, and
/// a bounded trail of recent smoothed samples.
///
/// The raw position is `None` whenever the pointer is outside the viewport
/// (or has never moved). The smoothed position is always defined; while the
/// raw pointer is absent it simply holds still.
#[derive(Debug)]
pub struct PointerTracker {
    raw: Option<Vec2>,
    smoothed: Vec2,
    trail: VecDeque<Vec2>,
}

impl PointerTracker {
    /// Creates a tracker with no raw pointer and the smoothed position at
    /// `center` (the viewport center), so the glow has a defined position
    /// before the pointer first moves.
    pub fn new(center: Vec2) -> Self {
        Self {
            raw: None,
            smoothed: center,
            trail: VecDeque::new(),
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        self.raw = Some(pos);
    }

    /// Handles the pointer leaving the viewport.
    ///
    /// The raw position becomes absent and the trail is emptied, so a later
    /// re-entry starts a fresh trail instead of resuming the old one.
    pub fn clear(&mut self) {
        self.raw = None;
        self.trail.clear();
    }

    /// One frame of smoothing and trail bookkeeping.
    ///
    /// While the raw pointer is absent this does nothing. Otherwise the
    /// smoothed position moves `cfg.smoothing` (15%) of the way toward the
    /// raw position, independently per axis, and is appended to the trail;
    /// the oldest samples are evicted once the trail exceeds
    /// `cfg.trail_capacity`.
    pub fn advance(&mut self, cfg: &Config) {
        let Some(raw) = self.raw else {
            return;
        };

        self.smoothed += (raw - self.smoothed) * cfg.smoothing;

        self.trail.push_back(self.smoothed);
        while self.trail.len() > cfg.trail_capacity {
            self.trail.pop_front();
        }
    }

    pub fn raw(&self) -> Option<Vec2> {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Trail samples, oldest first.
    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_without_a_raw_pointer_changes_nothing() {
        let cfg = Config::default();
        let center = Vec2::new(400.0, 300.0);
        let mut tracker = PointerTracker::new(center);

        tracker.advance(&cfg);

        assert_eq!(tracker.smoothed(), center);
        assert!(tracker.trail().is_empty());
        assert_eq!(tracker.raw(), None);
    }

    #[test]
    fn smoothing_moves_fifteen_percent_toward_the_target_per_tick() {
        let cfg = Config::default();
        let mut tracker = PointerTracker::new(Vec2::ZERO);
        tracker.set_position(Vec2::new(100.0, 200.0));

        tracker.advance(&cfg);

        assert!((tracker.smoothed().x - 15.0).abs() < 1e-4);
        assert!((tracker.smoothed().y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn smoothing_converges_geometrically_without_overshooting() {
        let cfg = Config::default();
        let start = Vec2::new(640.0, 360.0);
        let target = Vec2::new(40.0, 100.0);
        let mut tracker = PointerTracker::new(start);
        tracker.set_position(target);

        let mut prev = (target - start).length();
        for n in 1..=30 {
            tracker.advance(&cfg);
            let remaining = (target - tracker.smoothed()).length();
            let expected = (target - start).length() * 0.85_f32.powi(n);

            assert!(
                (remaining - expected).abs() < 1e-2,
                "tick {}: remaining {} vs expected {}",
                n,
                remaining,
                expected
            );
            assert!(remaining < prev, "must approach the target monotonically");
            prev = remaining;
        }
    }

    #[test]
    fn trail_keeps_the_most_recent_twenty_samples_oldest_first() {
        let cfg = Config::default();
        let mut tracker = PointerTracker::new(Vec2::ZERO);
        tracker.set_position(Vec2::new(500.0, 500.0));

        // Record every smoothed sample while pushing 25 ticks.
        let mut history = Vec::new();
        for _ in 0..25 {
            tracker.advance(&cfg);
            history.push(tracker.smoothed());
        }

        assert_eq!(tracker.trail().len(), cfg.trail_capacity);

        let kept: Vec<Vec2> = tracker.trail().iter().copied().collect();
        assert_eq!(kept, history[5..].to_vec(), "oldest five samples evicted");
    }

    #[test]
    fn clear_empties_the_trail_and_forgets_the_raw_pointer() {
        let cfg = Config::default();
        let mut tracker = PointerTracker::new(Vec2::ZERO);
        tracker.set_position(Vec2::new(100.0, 100.0));
        for _ in 0..5 {
            tracker.advance(&cfg);
        }
        assert_eq!(tracker.trail().len(), 5);

        tracker.clear();

        assert_eq!(tracker.raw(), None);
        assert!(tracker.trail().is_empty());

        // A tick in the cleared state draws from nothing and adds nothing.
        let smoothed = tracker.smoothed();
        tracker.advance(&cfg);
        assert!(tracker.trail().is_empty());
        assert_eq!(tracker.smoothed(), smoothed);
    }

    #[test]
    fn reentry_after_clear_starts_a_fresh_trail() {
        let cfg = Config::default();
        let mut tracker = PointerTracker::new(Vec2::ZERO);
        tracker.set_position(Vec2::new(100.0, 100.0));
        for _ in 0..10 {
            tracker.advance(&cfg);
        }

        tracker.clear();

        // Pointer re-enters: the trail restarts from scratch.
        tracker.set_position(Vec2::new(200.0, 50.0));
        tracker.advance(&cfg);

        assert_eq!(tracker.trail().len(), 1);
        assert_eq!(tracker.trail()[0], tracker.smoothed());
    }
}
