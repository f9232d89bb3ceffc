//! WAV export

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use rocksynth::SampleBuffer;

/// Write `buffer` as 16-bit stereo PCM.
pub fn write_wav(path: &Path, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .wrap_err_with(|| format!("failed to create {}", path.display()))?;
    for sample in buffer.interleaved() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!(path = %path.display(), frames = buffer.len(), "wrote wav");
    Ok(())
}
