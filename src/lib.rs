//! Appo renders an animated Apollonian gasket: circles recursively inscribed
//! inside a root circle, three mutually tangent children plus one central
//! child per level, with child placement perturbed per frame by slow
//! sinusoidal "wiggle" offsets. The frame sequence is written as a looping
//! animated GIF and optionally transcoded to MP4 via the system `ffmpeg`
//! binary.
//!
//! # Pipeline overview
//!
//! 1. **Wiggle**: `WiggleModel + time -> WiggleCoefficients` (one set per frame)
//! 2. **Generate**: [`Gasket::generate`] recurses over the packing and strokes
//!    circle outlines onto a [`DrawSurface`]
//! 3. **Sequence**: [`render_sequence`] drives 1+2 across a [`TimeRange`],
//!    producing ordered [`FrameRgba`] frames (optionally frame-parallel)
//! 4. **Export**: [`export_sequence`] encodes the frames as an infinite-loop
//!    GIF and streams them to `ffmpeg` for MP4 output
//!
//! Evaluation and generation are pure and deterministic for a given input;
//! all IO lives behind the encode boundary.
#![forbid(unsafe_code)]

pub mod encode;
pub mod foundation;
pub mod gasket;
pub mod render;

pub use encode::export::{ExportOpts, export_sequence};
pub use encode::ffmpeg::{EncodeConfig, FfmpegEncoder, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::gif::{GifOpts, write_gif};
pub use foundation::core::{Circle, Fps, FrameRgba, Point, Rgba8, TimeRange, Vec2};
pub use foundation::error::{AppoError, AppoResult};
pub use gasket::generate::{Gasket, circle_count};
pub use gasket::wiggle::{
    WIGGLE_MAGNITUDE, WIGGLE_PERIOD_X1, WIGGLE_PERIOD_X2, WIGGLE_PERIOD_Y, WiggleCoefficients,
    WiggleModel,
};
pub use render::sequencer::{SequenceOpts, default_base_radius, render_frame_at, render_sequence};
pub use render::surface::{CpuSurface, DrawSurface, RecordingSurface};
