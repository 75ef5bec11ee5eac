//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use pixelveil::{ChannelOp, PixelImage, Point, offset_rgb_inplace};

    let mut pixels = vec![250u8, 100, 5, 200, 0, 128, 255, 40];
    offset_rgb_inplace(&mut pixels, 10, ChannelOp::Add).unwrap();
    assert_eq!(pixels, [255, 110, 15, 200, 10, 138, 255, 40]);

    let mut img = PixelImage::from_vec(pixels, 2, 1).unwrap();
    img.swap_pixels(Point::new(0, 0), Point::new(1, 0)).unwrap();
    assert_eq!(img.as_bytes(), &[10, 138, 255, 40, 255, 110, 15, 200]);
    img.swap_pixels(Point::new(0, 0), Point::new(1, 0)).unwrap();
    assert_eq!(img.as_bytes(), &[255, 110, 15, 200, 10, 138, 255, 40]);
    assert!(img.swap_pixels(Point::new(0, 0), Point::new(5, 0)).is_err());
}

#[test]
fn readme_session() {
    use pixelveil::session::{Session, Transform};
    use pixelveil::{ChannelOp, PixelImage};

    let img = PixelImage::from_vec(vec![100, 110, 120, 255], 1, 1).unwrap();
    let mut session = Session::new();
    session.load(img.clone());

    session
        .apply(Transform::Offset {
            value: 20,
            op: ChannelOp::Add,
        })
        .unwrap();
    assert_eq!(
        session.transformed().unwrap().as_bytes(),
        &[120, 130, 140, 255]
    );

    let restored = session.revert().unwrap();
    assert_eq!(restored, img);
}

#[test]
fn readme_strided() {
    use pixelveil::{ChannelOp, offset_rgb_inplace_strided};

    let mut buf = vec![0u8; 256 * 100];
    offset_rgb_inplace_strided(&mut buf, 60, 100, 256, 25, ChannelOp::Add).unwrap();
    assert_eq!(&buf[..4], &[25, 25, 25, 0]);
    // Padding beyond the 60-pixel row untouched.
    assert_eq!(buf[60 * 4], 0);
}
