use std::sync::atomic::{AtomicBool, Ordering};

/// User-togglable flags, owned by the orchestrator and shared by `Arc`
/// handle with the render loop and the cue-scheduler thread.
///
/// The sound flag is re-read on every cue fire, never captured at
/// schedule time, so a toggle takes effect on the very next fire.
#[derive(Debug)]
pub struct Controls {
    sound_enabled: AtomicBool,
    panel_hidden: AtomicBool,
}

impl Controls {
    pub fn new(sound_enabled: bool) -> Self {
        Self {
            sound_enabled: AtomicBool::new(sound_enabled),
            panel_hidden: AtomicBool::new(false),
        }
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled.load(Ordering::Relaxed)
    }

    /// Flip the mute flag; returns the new value.
    pub fn toggle_sound(&self) -> bool {
        !self.sound_enabled.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn panel_hidden(&self) -> bool {
        self.panel_hidden.load(Ordering::Relaxed)
    }

    /// Flip the config-panel state; returns the new value.
    pub fn toggle_panel(&self) -> bool {
        !self.panel_hidden.fetch_xor(true, Ordering::Relaxed)
    }
}
