//! Frame timing and periodic FPS reporting.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How often [`FrameTimer::report_due`] fires by default.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Tracks frame durations for FPS calculation.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    last_report: Option<Instant>,
    max_samples: usize,
    report_interval: Duration,
}

impl FrameTimer {
    /// Create a new frame timer with a 120-sample rolling window.
    pub fn new() -> Self {
        Self::with_interval(REPORT_INTERVAL)
    }

    pub fn with_interval(report_interval: Duration) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: None,
            last_report: None,
            max_samples: 120,
            report_interval,
        }
    }

    /// Record the start of a new frame. Call this once per frame.
    pub fn begin_frame(&mut self) {
        self.begin_frame_at(Instant::now());
    }

    /// Record a frame start at an explicit instant. The first call only
    /// sets the baseline.
    pub fn begin_frame_at(&mut self, now: Instant) {
        if let Some(last) = self.last_frame.replace(now) {
            self.frame_times.push_back(now.saturating_duration_since(last));
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
        if self.last_report.is_none() {
            self.last_report = Some(now);
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.total_secs() / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Returns true once per report interval, resetting the interval.
    pub fn report_due(&mut self, now: Instant) -> bool {
        match self.last_report {
            Some(last) if now.saturating_duration_since(last) >= self.report_interval => {
                self.last_report = Some(now);
                true
            }
            _ => false,
        }
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
