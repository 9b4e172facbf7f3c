use super::*;
use crate::foundation::core::Point;
use crate::gasket::wiggle::WiggleModel;
use crate::render::surface::RecordingSurface;

fn root() -> Circle {
    Circle::new(Point::new(500.0, 500.0), 450.0)
}

fn still_gasket() -> Gasket {
    Gasket::new(WiggleCoefficients::default(), Rgba8::WHITE)
}

#[test]
fn level_zero_and_below_draw_nothing() {
    for level in [0, -1, -5] {
        let mut surface = RecordingSurface::new();
        still_gasket().generate(&mut surface, level, root());
        assert_eq!(surface.draw_count(), 0);
    }
}

#[test]
fn level_one_draws_only_the_root() {
    let mut surface = RecordingSurface::new();
    still_gasket().generate(&mut surface, 1, root());
    assert_eq!(surface.draw_count(), 1);
    assert_eq!(surface.circles[0].1, 450.0);
}

#[test]
fn circle_count_reference_values() {
    assert_eq!(circle_count(0), 0);
    assert_eq!(circle_count(-3), 0);
    let expected = [1u64, 4, 14, 47, 156, 516, 1705, 5632];
    for (n, want) in (1..=8).zip(expected) {
        assert_eq!(circle_count(n), want, "level {n}");
    }
}

#[test]
fn draw_count_matches_closed_form() {
    for level in 1..=8 {
        let mut surface = RecordingSurface::new();
        still_gasket().generate(&mut surface, level, root());
        assert_eq!(surface.draw_count(), circle_count(level), "level {level}");
    }
}

#[test]
fn wiggle_moves_centers_but_not_the_count() {
    let wiggle = WiggleModel::default().compute(0.7);
    let mut surface = RecordingSurface::new();
    Gasket::new(wiggle, Rgba8::WHITE).generate(&mut surface, 5, root());
    assert_eq!(surface.draw_count(), circle_count(5));

    let mut still = RecordingSurface::new();
    still_gasket().generate(&mut still, 5, root());
    assert_ne!(surface.circles, still.circles);
}

#[test]
fn child_radii_strictly_decrease() {
    // One subdivision step from first principles: both child radii shrink.
    for radius in [450.0, 17.0, 0.003] {
        let d = radius / (1.0 + COS_30);
        let r = radius - d;
        let rcenter = d - r;
        assert!(r > 0.0 && r < radius);
        assert!(rcenter < r);
    }

    // And across a full generation: exactly one drawn circle carries the
    // root radius, everything else is strictly smaller.
    let mut surface = RecordingSurface::new();
    still_gasket().generate(&mut surface, 6, root());
    let at_root = surface.circles.iter().filter(|(_, r)| *r >= 450.0).count();
    assert_eq!(at_root, 1);
    assert!(surface.circles.iter().all(|(_, r)| *r <= 450.0));
}

#[test]
fn outer_children_land_on_the_tangent_triangle() {
    let mut surface = RecordingSurface::new();
    still_gasket().generate(&mut surface, 2, root());
    assert_eq!(surface.draw_count(), 4);

    let d = 450.0 / (1.0 + COS_30);
    let bottom = surface.circles[1].0;
    let right = surface.circles[2].0;
    let left = surface.circles[3].0;
    assert!((bottom.x - 500.0).abs() < 1e-9 && (bottom.y - (500.0 + d)).abs() < 1e-9);
    assert!((right.x - (500.0 + d * COS_30)).abs() < 1e-9);
    assert!((right.y - (500.0 - d / 2.0)).abs() < 1e-9);
    assert!((left.x - (500.0 - d * COS_30)).abs() < 1e-9);
    assert!((left.y - (500.0 - d / 2.0)).abs() < 1e-9);

    // The central child only becomes visible one level deeper.
    let mut deeper = RecordingSurface::new();
    still_gasket().generate(&mut deeper, 3, root());
    assert!(
        deeper
            .circles
            .iter()
            .any(|(c, _)| (c.x - 500.0).abs() < 1e-9 && (c.y - 500.0).abs() < 1e-9)
    );
}

#[test]
fn center_child_descends_one_level_less_than_siblings() {
    // At level 2 the three outer children are drawn (level 1) but the center
    // child is not (level 0): four draws total, none at the parent center.
    let mut surface = RecordingSurface::new();
    still_gasket().generate(&mut surface, 2, root());
    assert_eq!(surface.draw_count(), 4);
    assert!(
        !surface
            .circles
            .iter()
            .skip(1)
            .any(|(c, _)| (c.x - 500.0).abs() < 1e-9 && (c.y - 500.0).abs() < 1e-9)
    );
}

#[test]
fn degenerate_roots_are_skipped_but_still_recursed() {
    for radius in [0.0, -3.0] {
        let mut surface = RecordingSurface::new();
        still_gasket().generate(&mut surface, 8, Circle::new(Point::new(0.0, 0.0), radius));
        assert_eq!(surface.draw_count(), 0);
    }
}
