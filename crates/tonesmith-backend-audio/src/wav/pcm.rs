//! PCM data extraction, hashing and read-back.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the RIFF chunks looking for `data`, so files with extra chunks
/// written by other tools are accepted.
///
/// # Returns
/// PCM data if found, or None if the format is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    find_chunk(wav_data, b"data")
}

/// Computes the BLAKE3 hash of a WAV file's PCM payload.
///
/// # Returns
/// Hex digest of the PCM data, or None if the format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

/// Decodes a mono 16-bit PCM WAV file into a buffer.
///
/// Samples are scaled back by `1 / 32767`, so a decoded buffer re-encodes to
/// the same PCM bytes.
pub fn decode_wav(wav_data: &[u8]) -> AudioResult<SampleBuffer> {
    let fmt = find_chunk(wav_data, b"fmt ")
        .ok_or_else(|| AudioError::malformed("missing RIFF/WAVE header or fmt chunk"))?;
    if fmt.len() < 16 {
        return Err(AudioError::malformed("fmt chunk is too short"));
    }

    let audio_format = u16::from_le_bytes([fmt[0], fmt[1]]);
    let channels = u16::from_le_bytes([fmt[2], fmt[3]]);
    let sample_rate = u32::from_le_bytes([fmt[4], fmt[5], fmt[6], fmt[7]]);
    let bits_per_sample = u16::from_le_bytes([fmt[14], fmt[15]]);

    if audio_format != 1 || bits_per_sample != 16 {
        return Err(AudioError::malformed(format!(
            "expected 16-bit PCM, found format {} with {} bits",
            audio_format, bits_per_sample
        )));
    }
    if channels != 1 {
        return Err(AudioError::malformed(format!(
            "expected mono audio, found {} channels",
            channels
        )));
    }
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }

    let pcm = extract_pcm_data(wav_data).ok_or_else(|| AudioError::malformed("missing data chunk"))?;
    let samples = pcm
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / 32767.0)
        .collect();

    Ok(SampleBuffer::from_samples(samples, sample_rate))
}

fn find_chunk<'a>(wav_data: &'a [u8], id: &[u8; 4]) -> Option<&'a [u8]> {
    if wav_data.len() < 12 {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == id {
            let start = pos + 8;
            let end = start.checked_add(chunk_size)?;
            return wav_data.get(start..end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}
