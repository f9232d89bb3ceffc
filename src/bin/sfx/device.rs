//! cpal-backed playback device
//!
//! The game thread pushes `PlaybackMessage`s into an rtrb ring buffer; the
//! cpal callback drains it and mixes active voices.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{Producer, RingBuffer};
use tracing::{error, warn};

use rocksynth::{
    playback::{Mixer, PlaybackDevice, PlaybackError, PlaybackMessage, VoiceHandle},
    SampleBuffer,
};

const QUEUE_CAPACITY: usize = 64;
const MAX_VOICES: usize = 16;

pub struct CpalDevice {
    producer: Producer<PlaybackMessage>,
    next_voice: u64,
    sample_rate: u32,
    // Dropping the stream stops audio.
    _stream: cpal::Stream,
}

impl CpalDevice {
    pub fn open() -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| unavailable("no default output device available"))?;
        let supported = device
            .default_output_config()
            .map_err(|err| unavailable(&format!("failed to fetch default output config: {err}")))?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(unavailable(&format!(
                "unsupported sample format {:?}",
                supported.sample_format()
            )));
        }

        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels() as usize;

        let (producer, consumer) = RingBuffer::<PlaybackMessage>::new(QUEUE_CAPACITY);
        let mut mixer = Mixer::new(consumer, MAX_VOICES);

        let stream = device
            .build_output_stream(
                &supported.into(),
                move |data: &mut [f32], _| mixer.render(data, channels),
                |err| error!(%err, "audio stream error"),
                None,
            )
            .map_err(|err| unavailable(&err.to_string()))?;
        stream.play().map_err(|err| unavailable(&err.to_string()))?;

        Ok(Self {
            producer,
            next_voice: 1,
            sample_rate,
            _stream: stream,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

impl PlaybackDevice for CpalDevice {
    fn play(
        &mut self,
        buffer: Arc<SampleBuffer>,
        volume: f32,
        looping: bool,
    ) -> Result<VoiceHandle, PlaybackError> {
        let voice = VoiceHandle::new(self.next_voice);
        self.producer
            .push(PlaybackMessage::Play {
                voice,
                buffer,
                volume,
                looping,
            })
            .map_err(|_| PlaybackError::Rejected("command queue full".into()))?;
        self.next_voice += 1;
        Ok(voice)
    }

    fn stop(&mut self, voice: VoiceHandle) {
        if self.producer.push(PlaybackMessage::Stop(voice)).is_err() {
            warn!(voice = voice.id(), "command queue full, stop dropped");
        }
    }
}

fn unavailable(reason: &str) -> PlaybackError {
    PlaybackError::BackendUnavailable(reason.to_string())
}
