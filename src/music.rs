//! Background-music toggle.
//!
//! Audio playback itself belongs to the host; this module only tracks the
//! toggle state around it. Hosts may reject a playback start (autoplay
//! policy), which is surfaced as a plain boolean and converted into the
//! pulsing-hint state rather than an error.

/// Host-side playback seam.
pub trait Playback {
    /// Attempt to start playback. Returns `false` when the host rejects it.
    fn start(&mut self) -> bool;
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicState {
    Paused,
    Playing,
    /// A start attempt was rejected; the UI keeps hinting at the control.
    HintPulsing,
}

#[derive(Debug)]
pub struct MusicToggle<P: Playback> {
    backend: P,
    state: MusicState,
}

pub const DEFAULT_VOLUME: f32 = 0.4;

impl<P: Playback> MusicToggle<P> {
    pub fn new(mut backend: P) -> Self {
        backend.set_volume(DEFAULT_VOLUME);
        Self {
            backend,
            state: MusicState::Paused,
        }
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// The music button. Pauses when playing; otherwise attempts a start and
    /// falls back to the pulsing hint when the host rejects it.
    pub fn toggle(&mut self) {
        match self.state {
            MusicState::Playing => {
                self.backend.pause();
                self.state = MusicState::Paused;
            }
            MusicState::Paused | MusicState::HintPulsing => {
                self.state = if self.backend.start() {
                    MusicState::Playing
                } else {
                    MusicState::HintPulsing
                };
            }
        }
    }

    /// The splash-screen dismissal counts as a user gesture, so playback is
    /// attempted immediately. A rejection here stays quiet: the state simply
    /// remains paused.
    pub fn splash_dismissed(&mut self) {
        if self.backend.start() {
            self.state = MusicState::Playing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePlayback {
        reject_start: bool,
        starts: u32,
        pauses: u32,
        volume: Option<f32>,
    }

    impl Playback for FakePlayback {
        fn start(&mut self) -> bool {
            self.starts += 1;
            !self.reject_start
        }

        fn pause(&mut self) {
            self.pauses += 1;
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = Some(volume);
        }
    }

    #[test]
    fn new_sets_volume_and_starts_paused() {
        let toggle = MusicToggle::new(FakePlayback::default());
        assert_eq!(toggle.state(), MusicState::Paused);
        assert_eq!(toggle.backend.volume, Some(DEFAULT_VOLUME));
    }

    #[test]
    fn toggle_cycles_playing_and_paused() {
        let mut toggle = MusicToggle::new(FakePlayback::default());
        toggle.toggle();
        assert!(toggle.is_playing());
        toggle.toggle();
        assert_eq!(toggle.state(), MusicState::Paused);
        assert_eq!(toggle.backend.starts, 1);
        assert_eq!(toggle.backend.pauses, 1);
    }

    #[test]
    fn rejected_start_enters_hint_pulsing_and_can_recover() {
        let mut toggle = MusicToggle::new(FakePlayback {
            reject_start: true,
            ..FakePlayback::default()
        });
        toggle.toggle();
        assert_eq!(toggle.state(), MusicState::HintPulsing);

        // Host policy changes after a user gesture elsewhere.
        toggle.backend.reject_start = false;
        toggle.toggle();
        assert!(toggle.is_playing());
    }

    #[test]
    fn splash_dismissal_starts_or_stays_paused() {
        let mut toggle = MusicToggle::new(FakePlayback::default());
        toggle.splash_dismissed();
        assert!(toggle.is_playing());

        let mut rejected = MusicToggle::new(FakePlayback {
            reject_start: true,
            ..FakePlayback::default()
        });
        rejected.splash_dismissed();
        assert_eq!(rejected.state(), MusicState::Paused);
    }
}
