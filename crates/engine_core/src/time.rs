//! Frame timing for the host loop.

use std::time::Instant;

/// Tracks elapsed time between frames.
///
/// The host calls [`Time::tick`] once at the top of every frame and hands the
/// resulting delta to the simulation. Nothing in the simulation reads the
/// wall clock directly.
#[derive(Debug)]
pub struct Time {
    started: Instant,
    last_frame: Instant,
    delta: f32,
    frames: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: 0.0,
            frames: 0,
        }
    }

    /// Advance to a new frame and return the elapsed seconds since the last.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;
        self.delta
    }

    /// Elapsed seconds of the most recent frame.
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    /// Seconds since the clock was created.
    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Frames ticked since the clock was created.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Instantaneous frames-per-second estimate from the last delta.
    pub fn fps(&self) -> f32 {
        if self.delta > 0.0 {
            1.0 / self.delta
        } else {
            0.0
        }
    }
}
