//! Audio interface
//!
//! Playback is owned by the host. Scenes only issue fire-and-forget commands
//! through [`AudioSink`]; no result ever flows back into gameplay.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball breaks a brick
    BrickHit,
}

/// Background music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Title screen music
    Title,
}

/// Audio commands the scenes issue
pub trait AudioSink {
    /// Play a one-shot effect at `volume` (0.0 - 1.0)
    fn play_effect(&mut self, effect: SoundEffect, volume: f32);

    /// Start (or keep playing) a looping track
    fn play_track(&mut self, track: Track);

    /// Set a track's volume (0.0 - 1.0)
    fn set_track_volume(&mut self, track: Track, volume: f32);

    fn stop_track(&mut self, track: Track);
}

/// Sink that logs commands instead of playing them (headless runs)
#[derive(Debug, Default)]
pub struct LogAudio {
    playing: Option<Track>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track currently playing, if any
    pub fn playing(&self) -> Option<Track> {
        self.playing
    }
}

impl AudioSink for LogAudio {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} at {:.2}", effect, volume);
    }

    fn play_track(&mut self, track: Track) {
        // Called every frame on the title screen; only log the start
        if self.playing != Some(track) {
            log::debug!("music {:?} started", track);
            self.playing = Some(track);
        }
    }

    fn set_track_volume(&mut self, track: Track, volume: f32) {
        log::debug!("music {:?} volume {:.2}", track, volume);
    }

    fn stop_track(&mut self, track: Track) {
        if self.playing == Some(track) {
            log::debug!("music {:?} stopped", track);
            self.playing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_audio_tracks_playing() {
        let mut audio = LogAudio::new();
        audio.play_track(Track::Title);
        audio.play_track(Track::Title);
        assert_eq!(audio.playing(), Some(Track::Title));
        audio.stop_track(Track::Title);
        assert_eq!(audio.playing(), None);
    }
}
