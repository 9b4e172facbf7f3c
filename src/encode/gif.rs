use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;
use gif::{Encoder, Frame, Repeat};

use crate::foundation::core::FrameRgba;
use crate::foundation::error::{AppoError, AppoResult};

// Quantizer speed for `Frame::from_rgba_speed` (1 = best, 30 = fastest). The
// gasket palette is essentially two colors, so a mid speed loses nothing.
const GIF_QUANTIZE_SPEED: i32 = 10;

/// Animated-GIF writer options.
#[derive(Clone, Copy, Debug)]
pub struct GifOpts {
    /// Per-frame display time in centiseconds (the GIF native unit);
    /// 10 means 100ms per frame.
    pub frame_delay_cs: u16,
}

impl Default for GifOpts {
    fn default() -> Self {
        Self { frame_delay_cs: 10 }
    }
}

/// Encode `frames` as an infinitely looping animated GIF at `path`.
///
/// All frames must share the same dimensions; the sequence order is written
/// as-is.
pub fn write_gif(path: &Path, frames: &[FrameRgba], opts: GifOpts) -> AppoResult<()> {
    if frames.is_empty() {
        return Err(AppoError::encode("gif output requires at least one frame"));
    }
    if opts.frame_delay_cs == 0 {
        return Err(AppoError::validation("gif frame delay must be > 0"));
    }

    let width: u16 = frames[0]
        .width
        .try_into()
        .map_err(|_| AppoError::encode("gif width exceeds u16"))?;
    let height: u16 = frames[0]
        .height
        .try_into()
        .map_err(|_| AppoError::encode("gif height exceeds u16"))?;
    for (idx, frame) in frames.iter().enumerate() {
        if frame.width != frames[0].width || frame.height != frames[0].height {
            return Err(AppoError::encode(format!(
                "frame {idx} size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, frames[0].width, frames[0].height
            )));
        }
        if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
            return Err(AppoError::encode(format!(
                "frame {idx} data size mismatch with width*height*4"
            )));
        }
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create gif '{}'", path.display()))?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height, &[])
        .map_err(|e| AppoError::encode(format!("failed to create gif encoder: {e}")))?;
    encoder
        .set_repeat(Repeat::Infinite)
        .map_err(|e| AppoError::encode(format!("failed to set gif repeat: {e}")))?;

    for frame in frames {
        // `from_rgba_speed` quantizes in place, so it needs its own copy.
        let mut rgba = frame.data.clone();
        let mut out = Frame::from_rgba_speed(width, height, &mut rgba, GIF_QUANTIZE_SPEED);
        out.delay = opts.frame_delay_cs;
        encoder
            .write_frame(&out)
            .map_err(|e| AppoError::encode(format!("failed to write gif frame: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
