use super::*;

fn small_opts() -> SequenceOpts {
    SequenceOpts::new(TimeRange::new(0.0, 1.0, 0.5).unwrap(), 64, 3)
}

#[test]
fn default_base_radius_is_ninety_percent_of_half() {
    assert_eq!(default_base_radius(1000), 450.0);
    assert_eq!(default_base_radius(64), 28.8);
}

#[test]
fn validation_fails_fast() {
    let model = WiggleModel::default();

    let mut opts = small_opts();
    opts.canvas_size = 0;
    assert!(render_sequence(&model, &opts).is_err());

    let mut opts = small_opts();
    opts.max_level = 0;
    assert!(render_sequence(&model, &opts).is_err());

    let mut opts = small_opts();
    opts.base_radius = -1.0;
    assert!(render_sequence(&model, &opts).is_err());

    let mut opts = small_opts();
    opts.parallel = true;
    opts.threads = Some(0);
    assert!(render_sequence(&model, &opts).is_err());
}

#[test]
fn sequential_run_produces_ordered_frames() {
    let model = WiggleModel::default();
    let opts = small_opts();
    let frames = render_sequence(&model, &opts).unwrap();

    assert_eq!(frames.len(), 2);
    for frame in &frames {
        assert_eq!((frame.width, frame.height), (64, 64));
        assert_eq!(frame.data.len(), 64 * 64 * 4);
    }
    // The wiggle moved between t=0 and t=0.5.
    assert_ne!(frames[0], frames[1]);

    // Frame i of the sequence is exactly the single-frame render at index i.
    assert_eq!(frames[0], render_frame_at(&model, &opts, 0).unwrap());
    assert_eq!(frames[1], render_frame_at(&model, &opts, 1).unwrap());
}

#[test]
fn parallel_matches_sequential() {
    let model = WiggleModel::default();
    let opts = small_opts();
    let sequential = render_sequence(&model, &opts).unwrap();

    let mut opts = small_opts();
    opts.parallel = true;
    opts.threads = Some(2);
    let parallel = render_sequence(&model, &opts).unwrap();

    assert_eq!(sequential, parallel);
}
