/// Frames per second and milliseconds per frame, averaged over a short
/// window so the numbers stay readable.
pub struct FrameStats {
    refresh_interval: f32,
    frames: u32,
    elapsed: f32,
    fps: f32,
    frame_ms: f32,
}

impl FrameStats {
    pub const REFRESH_INTERVAL: f32 = 1.0 / 30.0;

    pub fn new() -> Self {
        Self {
            refresh_interval: Self::REFRESH_INTERVAL,
            frames: 0,
            elapsed: 0.0,
            fps: 0.0,
            frame_ms: 0.0,
        }
    }

    /// Records one frame. Returns true when the averages were refreshed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.frames += 1;
        self.elapsed += dt;

        if self.elapsed < self.refresh_interval {
            return false;
        }

        self.fps = self.frames as f32 / self.elapsed;
        self.frame_ms = self.elapsed / self.frames as f32 * 1000.0;
        self.frames = 0;
        self.elapsed = 0.0;
        true
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    pub fn title(&self, name: &str) -> String {
        format!("{} - {:.0} FPS / {:.2} ms", name, self.fps, self.frame_ms)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refreshes_once_the_interval_has_passed() {
        let mut stats = FrameStats::new();

        assert!(!stats.tick(0.01));
        assert!(!stats.tick(0.01));
        assert_eq!(stats.fps(), 0.0);

        assert!(stats.tick(0.02));
        assert!((stats.fps() - 75.0).abs() < 1e-3);
        assert!((stats.frame_ms() - 13.333).abs() < 1e-2);

        // The window starts over.
        assert!(!stats.tick(0.001));
        assert!((stats.fps() - 75.0).abs() < 1e-3);
    }

    #[test]
    fn title_shows_both_numbers() {
        let mut stats = FrameStats::new();
        stats.tick(0.05);
        assert_eq!(stats.title("Voxel Editor"), "Voxel Editor - 20 FPS / 50.00 ms");
    }
}
