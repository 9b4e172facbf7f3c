use crate::foundation::core::{Circle, Rgba8};
use crate::gasket::wiggle::WiggleCoefficients;
use crate::render::surface::DrawSurface;

// cos(30 deg) = sqrt(3)/2, from the 30-60-90 triangle formed by three
// mutually tangent equal circles inscribed against the parent boundary.
const COS_30: f64 = 0.866_025_403_784_438_6;

/// One frame's gasket generator: wiggle coefficients plus outline color,
/// immutable for the whole recursion.
#[derive(Clone, Copy, Debug)]
pub struct Gasket {
    pub wiggle: WiggleCoefficients,
    pub outline: Rgba8,
}

impl Gasket {
    pub fn new(wiggle: WiggleCoefficients, outline: Rgba8) -> Self {
        Self { wiggle, outline }
    }

    /// Recursively draw the packing rooted at `circle` onto `surface`.
    ///
    /// Termination is governed solely by the `level` counter; radius shrinks
    /// geometrically on every descent but never cuts recursion short on its
    /// own. Circles whose radius has degenerated to zero or below are not
    /// drawn, but their subtree is still descended so depth accounting is
    /// identical on every branch.
    pub fn generate(&self, surface: &mut dyn DrawSurface, level: i32, circle: Circle) {
        if level <= 0 {
            return;
        }

        if circle.radius > 0.0 {
            surface.draw_circle_outline(circle.center, circle.radius, self.outline);
        }

        // Inscribed-child geometry: d is the distance from the parent center
        // to each outer child center, r the outer-child radius, rcenter the
        // central-child radius (may go negative at deep levels).
        let d = circle.radius / (1.0 + COS_30);
        let r = circle.radius - d;
        let rcenter = d - r;

        let level = level - 1;
        let (x, y) = (circle.center.x, circle.center.y);
        let w = self.wiggle;

        self.generate(surface, level, Circle::new((x, y + (1.0 + w.dy) * d), r));
        self.generate(
            surface,
            level,
            Circle::new((x + (1.0 + w.dx1) * d * COS_30, y - (1.0 + w.dx1) * d / 2.0), r),
        );
        self.generate(
            surface,
            level,
            Circle::new((x - (1.0 + w.dx2) * d * COS_30, y - (1.0 + w.dx2) * d / 2.0), r),
        );
        // The central child descends at one level less than its siblings.
        self.generate(surface, level - 1, Circle::new((x, y), rcenter));
    }
}

/// Closed-form draw-call count for a generation at `level`.
///
/// Follows the branching pattern exactly: one draw for the current circle,
/// three outer children one level down, one central child two levels down.
pub fn circle_count(level: i32) -> u64 {
    if level <= 0 {
        return 0;
    }
    1 + 3 * circle_count(level - 1) + circle_count(level - 2)
}

#[cfg(test)]
#[path = "../../tests/unit/gasket/generate.rs"]
mod tests;
