use rayon::prelude::*;
use tracing::{debug, info};

use crate::foundation::core::{Circle, FrameRgba, Point, Rgba8, TimeRange};
use crate::foundation::error::{AppoError, AppoResult};
use crate::gasket::generate::{Gasket, circle_count};
use crate::gasket::wiggle::WiggleModel;
use crate::render::surface::CpuSurface;

/// Root-circle radius used when none is configured explicitly.
pub fn default_base_radius(canvas_size: u32) -> f64 {
    0.9 * f64::from(canvas_size) / 2.0
}

/// Configuration for one sequence render.
#[derive(Clone, Debug)]
pub struct SequenceOpts {
    /// Time range sampled into frames (start inclusive, end exclusive).
    pub range: TimeRange,
    /// Side length of the square output canvas, in pixels.
    pub canvas_size: u32,
    /// Radius of the root circle, centered on the canvas.
    pub base_radius: f64,
    /// Recursion budget for the generator.
    pub max_level: i32,
    /// Solid background fill.
    pub background: Rgba8,
    /// Circle outline color.
    pub outline: Rgba8,
    /// Render frames on a rayon pool. Frames are independent; the collected
    /// sequence preserves time order either way.
    pub parallel: bool,
    /// Worker thread override (parallel mode only).
    pub threads: Option<usize>,
}

impl SequenceOpts {
    pub fn new(range: TimeRange, canvas_size: u32, max_level: i32) -> Self {
        Self {
            range,
            canvas_size,
            base_radius: default_base_radius(canvas_size),
            max_level,
            background: Rgba8::BLACK,
            outline: Rgba8::WHITE,
            parallel: false,
            threads: None,
        }
    }

    fn validate(&self) -> AppoResult<()> {
        if self.canvas_size == 0 {
            return Err(AppoError::validation("canvas size must be > 0"));
        }
        if self.max_level <= 0 {
            return Err(AppoError::validation("max level must be > 0"));
        }
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(AppoError::validation("base radius must be finite and > 0"));
        }
        Ok(())
    }
}

/// Render the full frame sequence for `opts`.
///
/// Fails fast on invalid configuration before any frame is produced. Frame
/// `i` is rendered at time `range.time_at(i)`; the returned sequence is in
/// strictly increasing time order.
#[tracing::instrument(skip(model, opts))]
pub fn render_sequence(model: &WiggleModel, opts: &SequenceOpts) -> AppoResult<Vec<FrameRgba>> {
    opts.validate()?;

    let frames = opts.range.frame_count();
    info!(
        frames,
        canvas = opts.canvas_size,
        levels = opts.max_level,
        circles_per_frame = circle_count(opts.max_level),
        "rendering gasket sequence"
    );

    if !opts.parallel {
        let mut out = Vec::with_capacity(frames.min(4096) as usize);
        for index in 0..frames {
            out.push(render_frame_at(model, opts, index)?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(opts.threads)?;
    let rendered = pool.install(|| {
        (0..frames)
            .into_par_iter()
            .map(|index| render_frame_at(model, opts, index))
            .collect::<Vec<_>>()
    });

    let mut out = Vec::with_capacity(rendered.len());
    for frame in rendered {
        out.push(frame?);
    }
    Ok(out)
}

/// Render the single frame at `index` of the sequence described by `opts`.
///
/// Coefficients are computed once here and stay fixed for the whole frame;
/// the surface is freshly allocated and owned by this call.
pub fn render_frame_at(
    model: &WiggleModel,
    opts: &SequenceOpts,
    index: u64,
) -> AppoResult<FrameRgba> {
    let time = opts.range.time_at(index);
    let wiggle = model.compute(time);

    let mut surface = CpuSurface::new(opts.canvas_size, opts.canvas_size, opts.background)?;
    let center = f64::from(opts.canvas_size) / 2.0;
    let gasket = Gasket::new(wiggle, opts.outline);
    gasket.generate(
        &mut surface,
        opts.max_level,
        Circle::new(Point::new(center, center), opts.base_radius),
    );

    debug!(frame = index, time, "rendered frame");
    Ok(surface.into_frame())
}

fn build_thread_pool(threads: Option<usize>) -> AppoResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(AppoError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AppoError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequencer.rs"]
mod tests;
