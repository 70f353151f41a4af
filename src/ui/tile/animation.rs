//! Time-driven value tracks with cancellable transitions
//!
//! A [`Track`] owns a resting value and at most one in-flight run. Every run
//! is stamped with a [`TransitionToken`]; starting another run or setting the
//! value directly invalidates older tokens, so a late completion for a
//! superseded run does nothing.

use super::mask::CircleMask;
use serde::{Deserialize, Serialize};

pub trait Lerp: Copy {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for CircleMask {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        CircleMask::lerp(self, to, t)
    }
}

/// Timing curve applied to run progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Handle for one transition. Only the newest token on a track is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// An in-flight transition
#[derive(Debug, Clone)]
pub struct AnimationRun<T> {
    pub from: T,
    pub to: T,
    pub duration: f64,
    pub started_at: f64,
    pub easing: Easing,
    /// Resting value applied when the run completes
    pub settle: T,
    pub token: TransitionToken,
}

impl<T: Lerp> AnimationRun<T> {
    /// Linear progress in 0..=1
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn value(&self, now: f64) -> T {
        self.from.lerp(&self.to, self.easing.apply(self.progress(now)))
    }
}

#[derive(Debug, Clone)]
pub struct Track<T> {
    resting: T,
    run: Option<AnimationRun<T>>,
    generation: u64,
}

impl<T: Lerp> Track<T> {
    pub fn new(value: T) -> Self {
        Self {
            resting: value,
            run: None,
            generation: 0,
        }
    }

    /// Value left in place once no run is active
    pub fn resting(&self) -> T {
        self.resting
    }

    pub fn run(&self) -> Option<&AnimationRun<T>> {
        self.run.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Jump to `value`, dropping any run without applying its settle value.
    pub fn set(&mut self, value: T) {
        self.generation += 1;
        self.run = None;
        self.resting = value;
    }

    pub fn animate(
        &mut self,
        from: T,
        to: T,
        settle: T,
        duration: f64,
        easing: Easing,
        now: f64,
    ) -> TransitionToken {
        self.generation += 1;
        let token = TransitionToken(self.generation);
        self.run = Some(AnimationRun {
            from,
            to,
            duration: duration.max(0.0),
            started_at: now,
            easing,
            settle,
            token,
        });
        token
    }

    /// Completion for `token`. Returns false when the token was superseded.
    pub fn finish(&mut self, token: TransitionToken) -> bool {
        if token.0 != self.generation {
            return false;
        }
        match self.run.take_if(|run| run.token == token) {
            Some(run) => {
                self.resting = run.settle;
                true
            }
            None => false,
        }
    }

    /// Complete an elapsed run. Returns whether a run is still in flight.
    pub fn tick(&mut self, now: f64) -> bool {
        let elapsed = self
            .run
            .as_ref()
            .filter(|run| run.is_done(now))
            .map(|run| run.token);
        if let Some(token) = elapsed {
            self.finish(token);
        }
        self.run.is_some()
    }

    /// Presentation value at `now`
    pub fn value(&self, now: f64) -> T {
        match &self.run {
            Some(run) => run.value(now),
            None => self.resting,
        }
    }
}
