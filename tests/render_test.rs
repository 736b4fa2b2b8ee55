use image::{Rgba, RgbaImage};
use instapump_icons::font::LabelFace;
use instapump_icons::icon_gen::{generate_icons, ICON_SIZES};
use instapump_icons::render::{parse_color, render_icon, shade_at, RenderConfig};
use tempfile::TempDir;

#[test]
fn test_rendered_buffer_dimensions() {
    let config = RenderConfig::default();
    for size in ICON_SIZES {
        let icon = render_icon(size, &config).expect("render should succeed");
        assert_eq!(icon.width(), size, "width for size {size}");
        assert_eq!(icon.height(), size, "height for size {size}");
    }
}

/// At size 16 the corner radius is floor(16 * 0.22) = 3. The pixel at
/// (0,0) sits sqrt(18) ≈ 4.24 from the corner circle center, past the
/// radius, so it must stay transparent; (1,1) is sqrt(8) ≈ 2.83 away and
/// must be opaque.
#[test]
fn test_corner_mask_at_size_16() {
    let config = RenderConfig::default();
    let icon = render_icon(16, &config).unwrap();

    for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
        assert_eq!(icon.get_pixel(x, y)[3], 0, "corner pixel ({x},{y})");
    }
    assert_eq!(icon.get_pixel(1, 1)[3], 255, "just inside the quarter-circle");

    // Edge pixels outside the corner squares are opaque.
    assert_eq!(icon.get_pixel(0, 3)[3], 255);
    assert_eq!(icon.get_pixel(8, 0)[3], 255);
    assert_eq!(icon.get_pixel(8, 8)[3], 255, "center");
}

/// The gradient at the exact diagonal midpoint of a 16 px icon:
/// t = (8+8)/32 = 0.5, so each channel is halfway between the endpoints,
/// truncated: r = 131 + 121*0.5 = 191, g = 58 + 118*0.5 = 117,
/// b = 180 - 111*0.5 = 124.5 -> 124.
#[test]
fn test_gradient_midpoint_color() {
    let config = RenderConfig::default();
    let icon = render_icon(16, &config).unwrap();
    assert_eq!(*icon.get_pixel(8, 8), Rgba([191, 117, 124, 255]));
}

#[test]
fn test_gradient_monotonic_along_diagonal() {
    let config = RenderConfig::default();
    let icon = render_icon(16, &config).unwrap();

    let mut prev: Option<Rgba<u8>> = None;
    for i in 0..16 {
        let pixel = *icon.get_pixel(i, i);
        if pixel[3] == 0 {
            continue; // masked corner
        }
        if let Some(p) = prev {
            assert!(pixel[0] >= p[0], "red must rise toward 252 at ({i},{i})");
            assert!(pixel[1] >= p[1], "green must rise toward 176 at ({i},{i})");
            assert!(pixel[2] <= p[2], "blue must fall toward 69 at ({i},{i})");
        }
        prev = Some(pixel);
    }
    assert!(prev.is_some(), "diagonal should contain opaque pixels");
}

#[test]
fn test_shade_at_is_pure_and_matches_buffer() {
    let config = RenderConfig::default();
    assert_eq!(shade_at(0, 0, 16, 3, &config), None);
    assert_eq!(
        shade_at(8, 8, 16, 3, &config),
        Some(Rgba([191, 117, 124, 255]))
    );
}

/// Below the 32 px threshold the output is exactly the gradient-masked
/// background: no pure white monogram pixel anywhere.
#[test]
fn test_no_monogram_below_threshold() {
    let config = RenderConfig::default();
    let icon = render_icon(16, &config).unwrap();
    let white = Rgba([255, 255, 255, 255]);
    assert!(
        icon.pixels().all(|p| *p != white),
        "16 px icon must not contain monogram pixels"
    );
}

/// At or above the threshold the monogram leaves at least one fully white,
/// fully opaque pixel near the geometric center.
#[test]
fn test_monogram_white_pixel_near_center() {
    let config = RenderConfig::default();
    let white = Rgba([255, 255, 255, 255]);

    for size in [64u32, 128] {
        let icon = render_icon(size, &config).unwrap();
        let found = (size / 4..size * 3 / 4)
            .any(|y| (size / 4..size * 3 / 4).any(|x| *icon.get_pixel(x, y) == white));
        assert!(found, "no white monogram pixel near center of {size} px icon");
    }
}

/// At exactly 32 px the overlay is drawn: the output must differ from the
/// bare gradient background.
#[test]
fn test_monogram_drawn_at_threshold() {
    let config = RenderConfig::default();
    let icon = render_icon(32, &config).unwrap();

    let mut background = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
    for y in 0..32 {
        for x in 0..32 {
            if let Some(pixel) = shade_at(x, y, 32, 7, &config) {
                background.put_pixel(x, y, pixel);
            }
        }
    }
    assert_ne!(
        icon.as_raw(),
        background.as_raw(),
        "32 px icon must carry the monogram overlay"
    );
}

#[test]
fn test_invalid_sizes_are_rejected() {
    let config = RenderConfig::default();
    assert!(render_icon(0, &config).is_err());
    assert!(render_icon(100_000, &config).is_err());
}

#[test]
fn test_render_is_deterministic() {
    let config = RenderConfig::default();
    let a = render_icon(48, &config).unwrap();
    let b = render_icon(48, &config).unwrap();
    assert_eq!(a.as_raw(), b.as_raw());
}

#[test]
fn test_parse_color_endpoints() {
    assert_eq!(parse_color("#833ab4"), Rgba([131, 58, 180, 255]));
    assert_eq!(parse_color("#fcb045"), Rgba([252, 176, 69, 255]));
    assert_eq!(parse_color("white"), Rgba([255, 255, 255, 255]));
    // Unparseable input falls back to opaque white.
    assert_eq!(parse_color("not-a-color"), Rgba([255, 255, 255, 255]));
}

/// The builtin bitmap face is fully deterministic: cell geometry at 28 px
/// uses an integer scale of 4, so "IP" measures (2*5 + 1) * 4 = 44 wide
/// and 7 * 4 = 28 tall.
#[test]
fn test_builtin_face_measure() {
    let face = LabelFace::Builtin;
    assert_eq!(face.measure("IP", 28), (44, 28));
    assert_eq!(face.measure("", 28), (0, 0));
}

#[test]
fn test_builtin_face_draw() {
    let face = LabelFace::Builtin;
    let white = Rgba([255, 255, 255, 255]);
    let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 0]));

    face.draw(&mut img, "IP", 28, 10, 15, white);

    // Top bar of the 'I' covers its whole first cell row.
    assert_eq!(*img.get_pixel(12, 16), white);
    // Center stem of the 'I'.
    assert_eq!(*img.get_pixel(20, 30), white);
    // The one-cell gap between 'I' and 'P' stays untouched.
    assert_eq!(img.get_pixel(32, 30)[3], 0);
}

/// Library-level end-to-end: two runs into separate directories produce
/// the same eight byte-identical, decodable PNGs.
#[test]
fn test_generate_icons_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");

    generate_icons(&first).expect("first run should succeed");
    generate_icons(&second).expect("second run should succeed");

    for size in ICON_SIZES {
        let name = format!("icon-{size}.png");
        let bytes_a = std::fs::read(first.join(&name)).expect("first file readable");
        let bytes_b = std::fs::read(second.join(&name)).expect("second file readable");
        assert!(!bytes_a.is_empty(), "{name} should not be empty");
        assert_eq!(bytes_a, bytes_b, "{name} should be byte-identical across runs");

        let decoded = image::open(first.join(&name)).expect("PNG should decode");
        assert_eq!(decoded.width(), size);
        assert_eq!(decoded.height(), size);
    }
}
