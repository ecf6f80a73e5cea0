//! Entrance animation of the detail screen, described as data.
//!
//! The renderer owns the actual animated values; this module fixes what is
//! animated, from where to where, and in which order. Stage one runs the
//! header/card tracks in parallel, stage two reveals price then chart.

use crate::shared::LoadState;
use serde::Serialize;
use std::time::Duration;

/// How a track moves toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Motion {
    /// Fixed-duration tween.
    Timing { duration: Duration },
    /// Physics spring; settles on its own schedule.
    Spring { tension: f64, friction: f64 },
}

/// Animated value a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Target {
    /// Screen opacity.
    Fade,
    /// Vertical offset of the price card, in points.
    Slide,
    /// Price card scale.
    Scale,
    /// Price card and stats opacity.
    Price,
    /// Chart opacity and offset.
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Track {
    pub target: Target,
    pub from: f64,
    pub to: f64,
    pub motion: Motion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrancePlan {
    /// Started together, reset to `from` before each play.
    pub parallel: Vec<Track>,
    /// Started one after another once the parallel group is kicked off.
    pub sequence: Vec<Track>,
}

const SPRING: Motion = Motion::Spring {
    tension: 50.0,
    friction: 7.0,
};

fn timing(ms: u64) -> Motion {
    Motion::Timing {
        duration: Duration::from_millis(ms),
    }
}

impl Default for EntrancePlan {
    fn default() -> Self {
        Self {
            parallel: vec![
                Track { target: Target::Fade, from: 0.0, to: 1.0, motion: timing(600) },
                Track { target: Target::Slide, from: 50.0, to: 0.0, motion: SPRING },
                Track { target: Target::Scale, from: 0.9, to: 1.0, motion: SPRING },
            ],
            sequence: vec![
                Track { target: Target::Price, from: 0.0, to: 1.0, motion: timing(500) },
                Track { target: Target::Chart, from: 0.0, to: 1.0, motion: timing(400) },
            ],
        }
    }
}

impl EntrancePlan {
    /// Initial value of every track, applied before a play starts.
    pub fn reset_values(&self) -> Vec<(Target, f64)> {
        self.parallel
            .iter()
            .chain(&self.sequence)
            .map(|t| (t.target, t.from))
            .collect()
    }

    /// Time until the sequential reveal finishes. Springs are excluded.
    pub fn sequence_duration(&self) -> Duration {
        self.sequence
            .iter()
            .filter_map(|t| match t.motion {
                Motion::Timing { duration } => Some(duration),
                Motion::Spring { .. } => None,
            })
            .sum()
    }

    /// Whether a transition from `previous` to `next` should (re)play the
    /// entrance: once per load that settles with data.
    pub fn should_play<T>(previous: &LoadState<T>, next: &LoadState<T>) -> bool {
        !matches!(previous, LoadState::Success(_)) && matches!(next, LoadState::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_matches_screen() {
        let plan = EntrancePlan::default();
        assert_eq!(plan.parallel.len(), 3);
        assert_eq!(plan.sequence_duration(), Duration::from_millis(900));
        assert_eq!(plan.sequence[0].target, Target::Price);
        assert_eq!(plan.sequence[1].target, Target::Chart);
    }

    #[test]
    fn test_reset_values() {
        let resets = EntrancePlan::default().reset_values();
        assert!(resets.contains(&(Target::Slide, 50.0)));
        assert!(resets.contains(&(Target::Scale, 0.9)));
        assert!(resets.contains(&(Target::Chart, 0.0)));
    }

    #[test]
    fn test_plays_when_a_load_succeeds() {
        let loading: LoadState<u8> = LoadState::Loading;
        let done = LoadState::Success(1);
        let failed = LoadState::Error("x".into());
        assert!(EntrancePlan::should_play(&loading, &done));
        assert!(!EntrancePlan::should_play(&loading, &failed));
        assert!(!EntrancePlan::should_play(&done, &done));
    }
}
