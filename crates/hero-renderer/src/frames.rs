//! Looping frame sequences for the background "video".

use std::time::Duration;

/// Delay used when a frame carries none (GIFs commonly encode 0).
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Shortest honoured delay; browsers clamp tiny GIF delays the same way.
const MIN_FRAME_DELAY: Duration = Duration::from_millis(20);

/// One decoded RGBA8 frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub rgba: Vec<u8>,
    pub delay: Duration,
}

/// Equal-sized frames played in order and looped forever.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSequence {
    pub width: u32,
    pub height: u32,
    frames: Vec<Frame>,
}

impl FrameSequence {
    pub fn new(width: u32, height: u32, frames: Vec<Frame>) -> Self {
        Self {
            width,
            height,
            frames,
        }
    }

    /// A single still frame.
    pub fn still(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self::new(
            width,
            height,
            vec![Frame {
                rgba,
                delay: DEFAULT_FRAME_DELAY,
            }],
        )
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.frames.iter().map(|f| f.delay).collect()
    }
}

fn effective_delay(delay: Duration) -> Duration {
    if delay.is_zero() {
        DEFAULT_FRAME_DELAY
    } else {
        delay.max(MIN_FRAME_DELAY)
    }
}

/// Wall-clock playhead over a list of frame delays.
#[derive(Debug, Clone)]
pub struct FramePlayer {
    delays: Vec<Duration>,
    index: usize,
    elapsed: Duration,
}

impl FramePlayer {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays: delays.into_iter().map(effective_delay).collect(),
            index: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Move the playhead forward by `dt`.
    ///
    /// Returns the new frame index when it changed, wrapping past the end.
    pub fn advance(&mut self, dt: Duration) -> Option<usize> {
        if self.delays.len() < 2 {
            return None;
        }

        let cycle: Duration = self.delays.iter().sum();
        // Drop whole loops first.
        let dt = if dt >= cycle {
            Duration::from_nanos((dt.as_nanos() % cycle.as_nanos()) as u64)
        } else {
            dt
        };

        let start = self.index;
        self.elapsed += dt;
        while self.elapsed >= self.delays[self.index] {
            self.elapsed -= self.delays[self.index];
            self.index = (self.index + 1) % self.delays.len();
        }

        (self.index != start).then_some(self.index)
    }
}

// =============================================================================
// Tests
// =============================================================================
