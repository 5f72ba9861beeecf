//! Time-based tween for the carousel page slide.
//!
//! The slide finishing is what releases the transition gate, so the tween
//! reports completion exactly once per `start`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// What a tick observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideFrame {
    /// Eased progress in `0.0..1.0`.
    Moving(f32),
    /// The slide just reached its end. Reported once.
    Finished,
}

#[derive(Debug, Clone)]
pub struct SlideAnimation {
    active: bool,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
    progress: f32,
}

impl Default for SlideAnimation {
    fn default() -> Self {
        Self {
            active: false,
            started_at: Instant::now(),
            duration: Duration::from_millis(600),
            easing: Easing::default(),
            progress: 0.0,
        }
    }
}

impl SlideAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Eased progress of the running slide, 0.0 when idle.
    pub fn progress(&self) -> f32 {
        if self.active { self.progress } else { 0.0 }
    }

    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.started_at = now;
        self.progress = 0.0;
    }

    /// Advance to `now`. `None` while idle.
    pub fn tick(&mut self, now: Instant) -> Option<SlideFrame> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            self.progress = 0.0;
            return Some(SlideFrame::Finished);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        self.progress = self.easing.apply(t);
        Some(SlideFrame::Moving(self.progress))
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.progress = 0.0;
    }
}
