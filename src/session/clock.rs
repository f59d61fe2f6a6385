/// Frame counter advanced once per scheduled frame. Not tied to wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationClock {
    frame: u64,
    running: bool,
}

impl AnimationClock {
    /// Stopped clock at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume ticking.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking; the counter keeps its value.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether [`AnimationClock::tick`] advances.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by one frame if running and return the current time.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.frame = self.frame.saturating_add(1);
        }
        self.frame
    }

    /// Current time.
    pub fn now(&self) -> u64 {
        self.frame
    }
}
