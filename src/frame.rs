use std::time::Instant;

pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the iterator was created, forwarded to the shader as-is
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame information
/// Use this in a loop: `for frame in frames { ... }`
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

/// Averages frame rate over `FPS_UPDATE_INTERVAL` windows
#[derive(Debug, Default)]
pub struct FpsCounter {
    frame_count: u32,
    timer: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns the new average when a window closes.
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.timer += delta;

        if self.timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.timer;
            self.frame_count = 0;
            self.timer = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frames_are_numbered_and_time_increases() {
        let mut frames = FrameIterator::new();
        let first = frames.next().unwrap();
        thread::sleep(Duration::from_millis(5));
        let second = frames.next().unwrap();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!(second.time > first.time);
        assert!(second.delta >= 0.004);
        assert_eq!(frames.frame_number(), 2);
    }

    #[test]
    fn fps_reported_once_per_interval() {
        let mut counter = FpsCounter::new();
        for _ in 0..63 {
            assert_eq!(counter.tick(1.0 / 64.0), None);
        }
        let fps = counter.tick(1.0 / 64.0).expect("window should close");
        assert!((fps - 64.0).abs() < 0.01);
        assert_eq!(counter.fps(), fps);
    }
}
