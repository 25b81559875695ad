//! Time-bounded interpolation between two values.
//!
//! The engine owns every active tween and is advanced once per tick with the
//! current clock reading. Instead of invoking callbacks it returns
//! [`TweenEvent`]s, which the caller applies to whatever state it owns.

use std::time::Duration;

use crate::easing::{lerp, Easing};

/// Values a tween can interpolate.
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        lerp(from, to, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// One interpolation from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    id: TweenId,
    from: T,
    to: T,
    duration: Duration,
    easing: Easing,
    started_at: Duration,
}

impl<T: Interpolate> Tween<T> {
    pub fn id(&self) -> TweenId {
        self.id
    }

    /// Linear progress in `[0, 1]` at clock reading `now`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Eased value at clock reading `now`.
    pub fn value_at(&self, now: Duration) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        T::interpolate(self.from, self.to, self.easing.apply(progress))
    }
}

/// What happened to a tween during [`TweenEngine::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEvent<T> {
    /// New interpolated value. Emitted for every active tween on every update.
    Updated { id: TweenId, value: T },
    /// The tween reached its end value and has been removed. Follows the
    /// final `Updated` for the same id within one update.
    Completed { id: TweenId },
}

/// Collection of active tweens advanced together.
#[derive(Debug)]
pub struct TweenEngine<T> {
    tweens: Vec<Tween<T>>,
    next_id: u64,
}

impl<T: Interpolate> TweenEngine<T> {
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            next_id: 1,
        }
    }

    /// Start a tween at clock reading `now`.
    pub fn start(&mut self, from: T, to: T, duration: Duration, easing: Easing, now: Duration) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.push(Tween {
            id,
            from,
            to,
            duration,
            easing,
            started_at: now,
        });
        id
    }

    /// Advance every tween to `now`, dropping the ones that finished.
    pub fn update(&mut self, now: Duration) -> Vec<TweenEvent<T>> {
        let mut events = Vec::with_capacity(self.tweens.len());
        self.tweens.retain(|tween| {
            events.push(TweenEvent::Updated {
                id: tween.id,
                value: tween.value_at(now),
            });
            if tween.progress(now) >= 1.0 {
                events.push(TweenEvent::Completed { id: tween.id });
                false
            } else {
                true
            }
        });
        events
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl<T: Interpolate> Default for TweenEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
