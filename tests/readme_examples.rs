//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use frameprep::{rgb_to_bgra, to_bgra};

    let rgb = [10u8, 20, 30, 40, 50, 60];
    assert_eq!(to_bgra(&rgb).unwrap(), [30, 20, 10, 255, 60, 50, 40, 255]);

    let mut bgra = [0u8; 8];
    rgb_to_bgra(&rgb, &mut bgra).unwrap();
    assert_eq!(bgra, [30, 20, 10, 255, 60, 50, 40, 255]);

    let words = frameprep::to_bgra_packed(&[0x11, 0x22, 0x33]).unwrap();
    assert_eq!(words, [0xFF11_2233]);
}

#[test]
fn readme_surface_layout() {
    use frameprep::{ChannelOrder, Flip, SurfaceLayout, layout};

    let rgb = [1u8, 2, 3, 4, 5, 6];
    let surface = SurfaceLayout::new(ChannelOrder::Bgra, Flip::Horizontal);
    let out = layout::convert_rgb(&rgb, 2, 1, surface).unwrap();
    assert_eq!(out, [6, 5, 4, 255, 3, 2, 1, 255]);
}

#[test]
fn readme_compare() {
    use frameprep::compare::{Comparison, compare};

    let a = [1u8, 2, 3, 255, 4, 5, 6, 255];
    let b = [1u8, 2, 3, 255, 9, 5, 6, 255];
    let result = compare(&a, &b);
    assert_eq!(
        result,
        Comparison::Mismatch {
            offset: 4,
            a: 4,
            b: 9
        }
    );
    assert_eq!(
        result.to_string(),
        "ERROR: byte 4 does not equal byte 9 at offset 4"
    );
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use frameprep::typed_rgb;
    use rgb::{Bgra, Rgb};

    let frame: Vec<Rgb<u8>> = vec![Rgb::new(255, 0, 128); 100];
    let bgra = typed_rgb::rgb_to_bgra_vec(&frame);
    assert_eq!(bgra[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use frameprep::{Flip, imgref};
    use rgb::{Bgra, Rgb};

    let src = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 640 * 480], 640, 480);
    let bgra: ImgVec<Bgra<u8>> = imgref::convert_rgb_to_bgra(src.as_ref(), Flip::Vertical);
    assert_eq!(bgra.width(), 640);
    assert_eq!(bgra.height(), 480);
}
