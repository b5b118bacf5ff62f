//! Audio capability
//!
//! The game only decides *which* sound plays; the host supplies an
//! [`AudioSink`] that actually plays it. Playback is fire-and-forget and
//! overlapping sounds are allowed.

/// Number of trampoline bounce variations
pub const TRAMPOLINE_SOUNDS: u8 = 2;
/// Number of puddle splash variations
pub const SPLASH_SOUNDS: u8 = 5;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Cat hits the ground hard
    Meow,
    /// Cannon fires
    Cannon,
    /// Player triggered a landing dive
    Land,
    /// Trampoline bounce (variation index)
    Trampoline(u8),
    /// Puddle splash (variation index)
    Splash(u8),
    /// Cat grabbed a clew of yarn
    HappyMeow,
    /// Background music loop
    Music,
}

impl SoundEffect {
    /// Stable asset name for the host's sound bank
    pub fn asset_name(&self) -> String {
        match self {
            SoundEffect::Meow => "meow".to_string(),
            SoundEffect::Cannon => "cannon".to_string(),
            SoundEffect::Land => "land".to_string(),
            SoundEffect::Trampoline(i) => format!("trampoline-{}", i + 1),
            SoundEffect::Splash(i) => format!("puddle-{}", i + 1),
            SoundEffect::HappyMeow => "happy-meow".to_string(),
            SoundEffect::Music => "music".to_string(),
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::Music)
    }
}

/// Something that can play a sound at a given volume (0.0 - 1.0)
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Records every request; handy for headless runs and tests
impl AudioSink for Vec<(SoundEffect, f32)> {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.push((effect, volume));
    }
}

/// Sink that only logs, for the native build which has no audio device
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.asset_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_started: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.2,
            muted: false,
            music_started: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Start the music loop once; later calls do nothing
    pub fn start_music(&mut self) {
        if self.music_started {
            return;
        }
        self.music_started = true;
        self.play(SoundEffect::Music);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_scales_by_channel() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(1.0);
        audio.set_music_volume(0.4);
        audio.play(SoundEffect::Meow);
        audio.play(SoundEffect::Music);
        let played = audio.sink();
        assert_eq!(played[0].0, SoundEffect::Meow);
        assert!((played[0].1 - 0.5).abs() < 1e-6);
        assert!((played[1].1 - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_muted(true);
        audio.play(SoundEffect::Cannon);
        assert!(audio.sink().is_empty());
    }

    #[test]
    fn test_music_starts_once() {
        let mut audio = AudioManager::new(Vec::new());
        audio.start_music();
        audio.start_music();
        assert_eq!(audio.sink().len(), 1);
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::Land);
        assert!(audio.sink().is_empty());
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(SoundEffect::Trampoline(0).asset_name(), "trampoline-1");
        assert_eq!(SoundEffect::Splash(4).asset_name(), "puddle-5");
    }
}
