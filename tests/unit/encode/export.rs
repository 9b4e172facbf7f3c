use super::*;

fn solid_frame(side: u32, rgba: [u8; 4]) -> FrameRgba {
    FrameRgba {
        width: side,
        height: side,
        data: rgba.repeat((side * side) as usize),
    }
}

#[test]
fn export_requires_frames() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ExportOpts::new(dir.path().join("out.gif"), None);
    assert!(export_sequence(&[], &opts).is_err());
}

#[test]
fn export_refuses_to_clobber_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let gif_path = dir.path().join("out.gif");
    std::fs::write(&gif_path, b"existing").unwrap();

    let mut opts = ExportOpts::new(gif_path, None);
    opts.overwrite = false;

    let err = export_sequence(&[solid_frame(8, [0, 0, 0, 255])], &opts).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    // The existing artifact was left untouched.
    assert_eq!(std::fs::read(&opts.gif_path).unwrap(), b"existing");
}

#[test]
fn export_writes_gif_and_skips_mp4_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let gif_path = dir.path().join("out.gif");

    let frames = vec![
        solid_frame(8, [0, 0, 0, 255]),
        solid_frame(8, [255, 255, 255, 255]),
    ];
    export_sequence(&frames, &ExportOpts::new(&gif_path, None)).unwrap();

    let bytes = std::fs::read(&gif_path).unwrap();
    assert_eq!(&bytes[0..6], b"GIF89a");
}
