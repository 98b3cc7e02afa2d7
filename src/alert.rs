//! Transition alerts.

use notify_rust::{Notification, Urgency};
use std::process::{Child, Command, Stdio};

/// Alert capability consumed by the controller.
///
/// `play` fires on every zero-crossing; `reset` is called by the reset
/// operation only and stops anything still sounding. Failures stay inside
/// the sink; alert playback has no feedback into timer state.
pub trait AlertSink {
    fn play(&mut self);
    fn reset(&mut self);
}

/// Desktop notification plus an optional beep subprocess.
pub struct DesktopAlert {
    sound_enabled: bool,
    playing: Option<Child>,
}

impl DesktopAlert {
    pub fn new(sound_enabled: bool) -> Self {
        Self {
            sound_enabled,
            playing: None,
        }
    }

    fn stop_sound(&mut self) {
        if let Some(mut child) = self.playing.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl AlertSink for DesktopAlert {
    fn play(&mut self) {
        let _ = Notification::new()
            .summary("⏰ Time's up!")
            .body("Switching between session and break.")
            .appname("pomoclock")
            .icon("alarm-clock")
            .urgency(Urgency::Critical)
            .show();

        if self.sound_enabled {
            self.stop_sound();
            self.playing = spawn_sound();
        }
    }

    fn reset(&mut self) {
        self.stop_sound();
    }
}

impl Drop for DesktopAlert {
    fn drop(&mut self) {
        self.stop_sound();
    }
}

fn spawn_sound() -> Option<Child> {
    for (cmd, file) in [
        ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
        ("aplay", "/usr/share/sounds/sound-icons/guitar-11.wav"),
        ("aplay", "/usr/share/sounds/generic.wav"),
    ] {
        if std::path::Path::new(file).exists() {
            return Command::new(cmd)
                .arg(file)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .ok();
        }
    }
    None
}
