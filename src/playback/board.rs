use std::sync::Arc;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing::{info, warn};

use crate::{
    config::SynthConfig,
    error::SynthError,
    io::SampleBuffer,
    playback::{AudioSettings, PlaybackDevice, PlaybackError, VoiceHandle},
    sequencing::{synthesize_background_score, ChordProgression, ScoreConfig},
    synth::{Effect, SoundBank},
};

/*
Sound Board
===========

The game-facing audio layer. It owns:

  - the pre-rendered effect bank and the background loop
  - the player's AudioSettings
  - the playback device, if one could be opened

Failure handling is narrow. A device that reports BackendUnavailable is
dropped and the board goes quiet for the rest of the session; a Rejected
request is logged and skipped. Nothing else is swallowed.
*/

pub struct SoundBoard<D: PlaybackDevice> {
    device: Option<D>,
    bank: SoundBank,
    music: Arc<SampleBuffer>,
    music_voice: Option<VoiceHandle>,
    settings: AudioSettings,
}

impl<D: PlaybackDevice> SoundBoard<D> {
    pub fn new(device: D, bank: SoundBank, music: Arc<SampleBuffer>, settings: AudioSettings) -> Self {
        Self {
            device: Some(device),
            bank,
            music,
            music_voice: None,
            settings,
        }
    }

    /// Render the effect bank and a full background loop, then wrap `device`.
    pub fn build(
        device: D,
        config: &SynthConfig,
        score: &ScoreConfig,
        seed: u64,
    ) -> Result<Self, SynthError> {
        let bank = SoundBank::build(config, seed)?;
        let mut rng = Pcg64::seed_from_u64(seed.wrapping_add(1));
        let music = synthesize_background_score(
            &ChordProgression::a_minor(),
            ScoreConfig::LOOP_SECONDS,
            score,
            config,
            &mut rng,
        )?;
        info!(seconds = ScoreConfig::LOOP_SECONDS, "background loop ready");
        Ok(Self::new(device, bank, Arc::new(music), AudioSettings::default()))
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }

    /// False once the device has reported itself unusable.
    pub fn is_available(&self) -> bool {
        self.device.is_some()
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_voice.is_some()
    }

    /// Fire an effect at the sfx volume. No-op when sfx are off.
    pub fn play(&mut self, effect: Effect) -> Option<VoiceHandle> {
        if !self.settings.sfx_enabled() {
            return None;
        }
        let buffer = Arc::clone(self.bank.get(effect));
        let volume = self.settings.sfx_volume();
        self.submit(buffer, volume, false)
    }

    pub fn start_music(&mut self) {
        if !self.settings.music_enabled() || self.music_voice.is_some() {
            return;
        }
        let buffer = Arc::clone(&self.music);
        let volume = self.settings.music_volume();
        self.music_voice = self.submit(buffer, volume, true);
    }

    pub fn stop_music(&mut self) {
        if let Some(voice) = self.music_voice.take() {
            if let Some(device) = self.device.as_mut() {
                device.stop(voice);
            }
        }
    }

    /// Flip music on or off and return the new state.
    pub fn toggle_music(&mut self) -> bool {
        let enabled = !self.settings.music_enabled();
        self.settings.set_music_enabled(enabled);
        if enabled {
            self.start_music();
        } else {
            self.stop_music();
        }
        enabled
    }

    /// Flip sound effects on or off and return the new state.
    pub fn toggle_sfx(&mut self) -> bool {
        let enabled = !self.settings.sfx_enabled();
        self.settings.set_sfx_enabled(enabled);
        enabled
    }

    /// Change the music volume; a playing loop restarts at the new level.
    pub fn set_music_volume(&mut self, volume: f32) {
        self.settings.set_music_volume(volume);
        if self.music_voice.is_some() {
            self.stop_music();
            self.start_music();
        }
    }

    /// Applies to effects fired from now on.
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.settings.set_sfx_volume(volume);
    }

    fn submit(&mut self, buffer: Arc<SampleBuffer>, volume: f32, looping: bool) -> Option<VoiceHandle> {
        let device = self.device.as_mut()?;
        match device.play(buffer, volume, looping) {
            Ok(voice) => Some(voice),
            Err(PlaybackError::BackendUnavailable(reason)) => {
                warn!(%reason, "audio backend unavailable, disabling playback");
                self.device = None;
                self.music_voice = None;
                None
            }
            Err(err @ PlaybackError::Rejected(_)) => {
                warn!(error = %err, "playback request dropped");
                None
            }
        }
    }
}
