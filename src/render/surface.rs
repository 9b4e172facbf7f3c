use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{FrameRgba, Point, Rgba8};
use crate::foundation::error::{AppoError, AppoResult};

/// Outline width in device pixels.
const OUTLINE_STROKE_WIDTH: f64 = 1.0;
/// Flattening tolerance when converting circles to stroke paths.
const CIRCLE_PATH_TOLERANCE: f64 = 0.1;

/// Drawing-surface capability consumed by the gasket generator.
///
/// The generator only ever needs one operation; everything else (allocation,
/// background fill, pixel readback) stays on the concrete surface type.
pub trait DrawSurface {
    fn draw_circle_outline(&mut self, center: Point, radius: f64, color: Rgba8);
}

/// CPU rasterization surface.
///
/// Outlines are recorded into a `vello_cpu` render context and rasterized
/// over the solid background on readback.
pub struct CpuSurface {
    width: u16,
    height: u16,
    background: Rgba8,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Allocate a blank surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba8) -> AppoResult<Self> {
        if width == 0 || height == 0 {
            return Err(AppoError::validation("surface width/height must be non-zero"));
        }
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| AppoError::render("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| AppoError::render("surface height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(OUTLINE_STROKE_WIDTH));

        Ok(Self {
            width: width_u16,
            height: height_u16,
            background,
            ctx,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize every recorded outline over the background and read the
    /// pixels back as an opaque RGBA8 frame.
    pub fn into_frame(mut self) -> FrameRgba {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap(&mut pixmap, self.background.to_array());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

impl DrawSurface for CpuSurface {
    fn draw_circle_outline(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        let circle = vello_cpu::kurbo::Circle::new(
            vello_cpu::kurbo::Point::new(center.x, center.y),
            radius,
        );
        self.ctx.stroke_path(&circle.to_path(CIRCLE_PATH_TOLERANCE));
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

/// Recording surface for tests and debugging: captures draw calls without
/// rasterizing anything.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// `(center, radius)` per draw call, in draw order.
    pub circles: Vec<(Point, f64)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_count(&self) -> u64 {
        self.circles.len() as u64
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_circle_outline(&mut self, center: Point, radius: f64, _color: Rgba8) {
        self.circles.push((center, radius));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
