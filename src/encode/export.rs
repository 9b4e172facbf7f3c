use std::path::PathBuf;

use tracing::info;

use crate::encode::ffmpeg::{EncodeConfig, FfmpegEncoder};
use crate::encode::gif::{GifOpts, write_gif};
use crate::foundation::core::{Fps, FrameRgba};
use crate::foundation::error::{AppoError, AppoResult};

/// Export configuration: where the artifacts go and how fast they play.
#[derive(Clone, Debug)]
pub struct ExportOpts {
    /// Animated-GIF output path.
    pub gif_path: PathBuf,
    /// Optional MP4 output path; `None` skips video encoding.
    pub mp4_path: Option<PathBuf>,
    /// GIF timing; the MP4 is encoded at the same native frame timing.
    pub gif: GifOpts,
    /// Refuse to clobber existing artifacts when `false`.
    pub overwrite: bool,
}

impl ExportOpts {
    pub fn new(gif_path: impl Into<PathBuf>, mp4_path: Option<PathBuf>) -> Self {
        Self {
            gif_path: gif_path.into(),
            mp4_path,
            gif: GifOpts::default(),
            overwrite: true,
        }
    }
}

/// Persist a frame sequence as a looping animated GIF, then transcode the
/// same sequence to MP4 at the GIF's native frame timing.
///
/// There is no partial-success mode: any failure is fatal and the run's
/// artifacts must not be considered valid.
#[tracing::instrument(skip(frames, opts))]
pub fn export_sequence(frames: &[FrameRgba], opts: &ExportOpts) -> AppoResult<()> {
    if frames.is_empty() {
        return Err(AppoError::validation("export requires at least one frame"));
    }
    if !opts.overwrite {
        if opts.gif_path.exists() {
            return Err(AppoError::validation(format!(
                "output file '{}' already exists",
                opts.gif_path.display()
            )));
        }
        if let Some(mp4_path) = &opts.mp4_path
            && mp4_path.exists()
        {
            return Err(AppoError::validation(format!(
                "output file '{}' already exists",
                mp4_path.display()
            )));
        }
    }

    crate::encode::ffmpeg::ensure_parent_dir(&opts.gif_path)?;
    info!(path = %opts.gif_path.display(), frames = frames.len(), "writing animated gif");
    write_gif(&opts.gif_path, frames, opts.gif)?;

    if let Some(mp4_path) = &opts.mp4_path {
        info!(path = %mp4_path.display(), "encoding mp4");
        let cfg = EncodeConfig {
            width: frames[0].width,
            height: frames[0].height,
            fps: Fps::from_frame_delay_cs(opts.gif.frame_delay_cs)?,
            out_path: mp4_path.clone(),
            overwrite: opts.overwrite,
        };
        let mut encoder = FfmpegEncoder::new(cfg)?;
        for frame in frames {
            encoder.encode_frame(frame)?;
        }
        encoder.finish()?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/export.rs"]
mod tests;
