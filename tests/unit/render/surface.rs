use super::*;

#[test]
fn rejects_zero_and_oversized_dimensions() {
    assert!(CpuSurface::new(0, 10, Rgba8::BLACK).is_err());
    assert!(CpuSurface::new(10, 0, Rgba8::BLACK).is_err());
    assert!(CpuSurface::new(70_000, 10, Rgba8::BLACK).is_err());
    assert!(CpuSurface::new(10, 70_000, Rgba8::BLACK).is_err());
}

#[test]
fn blank_surface_reads_back_background() {
    let background = Rgba8::opaque(10, 20, 30);
    let surface = CpuSurface::new(4, 4, background).unwrap();
    assert_eq!((surface.width(), surface.height()), (4, 4));

    let frame = surface.into_frame();
    assert_eq!((frame.width, frame.height), (4, 4));
    assert_eq!(frame.data.len(), 4 * 4 * 4);
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, background.to_array());
    }
}

#[test]
fn outline_touches_the_ring_but_not_the_interior() {
    let mut surface = CpuSurface::new(64, 64, Rgba8::BLACK).unwrap();
    surface.draw_circle_outline(Point::new(32.0, 32.0), 20.0, Rgba8::WHITE);
    let frame = surface.into_frame();

    let px = |x: u32, y: u32| {
        let idx = ((y * frame.width + x) * 4) as usize;
        [frame.data[idx], frame.data[idx + 1], frame.data[idx + 2]]
    };

    // Something was stroked.
    assert!(frame.data.chunks_exact(4).any(|p| p[0] > 0));
    // The interior and the canvas corner stay background.
    assert_eq!(px(32, 32), [0, 0, 0]);
    assert_eq!(px(0, 0), [0, 0, 0]);
    // Every pixel stays opaque.
    assert!(frame.data.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn recording_surface_captures_draws_in_order() {
    let mut surface = RecordingSurface::new();
    assert_eq!(surface.draw_count(), 0);

    surface.draw_circle_outline(Point::new(1.0, 2.0), 3.0, Rgba8::WHITE);
    surface.draw_circle_outline(Point::new(4.0, 5.0), 6.0, Rgba8::WHITE);

    assert_eq!(surface.draw_count(), 2);
    assert_eq!(surface.circles[0], (Point::new(1.0, 2.0), 3.0));
    assert_eq!(surface.circles[1], (Point::new(4.0, 5.0), 6.0));
}
