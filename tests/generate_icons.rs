//! End-to-end tests: PNG on disk in, full adaptive icon asset tree out.

use std::fs;
use std::path::Path;

use adaptive_icon_renderer::{
    BackgroundChoice, Color, Density, Error, IconRenderer, LayerKind, OutputSet,
    PREVIEW_FILE_NAME, RenderConfig, SourceImage, manifest_background,
};
use image::{Rgba, RgbaImage};

fn write_png(path: &Path, image: &RgbaImage) {
    image.save_with_format(path, image::ImageFormat::Png).unwrap();
}

fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

fn is_solid(image: &RgbaImage, expected: [u8; 4]) -> bool {
    image.pixels().all(|p| p.0 == expected)
}

/// Runs the pipeline the way the binary does, minus argument parsing.
fn generate(dir: &Path, source: &Path, explicit: Option<Color>) -> Vec<std::path::PathBuf> {
    let config = RenderConfig::default();
    let background = match explicit {
        Some(color) => BackgroundChoice::Explicit(color),
        None => BackgroundChoice::Inferred {
            fallback: manifest_background(&dir.join("app.json"), config.default_background),
        },
    };
    let source = SourceImage::open(source).unwrap();
    let output = OutputSet::new(dir.join("assets/images"), dir.join("res"));
    IconRenderer::new(config)
        .generate(&source, background, &output)
        .unwrap()
}

#[test]
fn e2e_red_square_without_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("icon.png");
    write_png(&icon, &RgbaImage::from_pixel(512, 512, Rgba([255, 0, 0, 255])));

    let written = generate(dir.path(), &icon, None);
    assert_eq!(written.len(), 3 + 5 * 4);

    let assets = dir.path().join("assets/images");

    let background = load_rgba(&assets.join(LayerKind::Background.asset_file_name()));
    assert_eq!(background.dimensions(), (432, 432));
    assert!(is_solid(&background, [255, 0, 0, 255]));

    let foreground = load_rgba(&assets.join(LayerKind::Foreground.asset_file_name()));
    assert_eq!(foreground.dimensions(), (432, 432));
    assert_eq!(foreground.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(foreground.get_pixel(431, 431).0, [0, 0, 0, 0]);
    assert_eq!(foreground.get_pixel(216, 216).0, [255, 0, 0, 255]);
    assert_eq!(foreground.get_pixel(83, 216).0[3], 0);
    assert_eq!(foreground.get_pixel(84, 216).0[3], 255);

    let monochrome = load_rgba(&assets.join(LayerKind::Monochrome.asset_file_name()));
    let center = monochrome.get_pixel(216, 216).0;
    assert_eq!(monochrome.get_pixel(0, 0).0[3], 0);
    assert_eq!(center, [76, 76, 76, 255]);
}

#[test]
fn e2e_explicit_color_overrides_photographic_corners() {
    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("photo.png");
    let photo = RgbaImage::from_fn(300, 200, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8, 255])
    });
    write_png(&icon, &photo);

    generate(dir.path(), &icon, Some("#112233".parse().unwrap()));

    let output = OutputSet::new(dir.path().join("assets/images"), dir.path().join("res"));
    for density in Density::ALL {
        let bg = load_rgba(&output.mipmap_path(density, LayerKind::Background));
        let size = density.pixel_size(108);
        assert_eq!(bg.dimensions(), (size, size));
        assert!(is_solid(&bg, [0x11, 0x22, 0x33, 255]), "{density}");
    }
}

#[test]
fn e2e_manifest_color_used_when_corners_differ() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("app.json"),
        r##"{"expo":{"android":{"adaptiveIcon":{"backgroundColor":"#ABCDEF"}}}}"##,
    )
    .unwrap();
    let icon = dir.path().join("icon.png");
    let mut img = RgbaImage::from_pixel(128, 128, Rgba([5, 5, 5, 255]));
    img.put_pixel(0, 127, Rgba([6, 5, 5, 255]));
    write_png(&icon, &img);

    generate(dir.path(), &icon, None);

    let bg = load_rgba(&dir.path().join("assets/images/android-icon-background.png"));
    assert!(is_solid(&bg, [0xAB, 0xCD, 0xEF, 255]));
}

#[test]
fn e2e_every_density_gets_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("icon.png");
    write_png(&icon, &RgbaImage::from_pixel(256, 256, Rgba([20, 40, 60, 255])));

    generate(dir.path(), &icon, None);

    let output = OutputSet::new(dir.path().join("assets/images"), dir.path().join("res"));
    for density in Density::ALL {
        let mut names: Vec<_> = fs::read_dir(output.density_dir(density))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names.len(), 4, "{density}: {names:?}");
        assert!(names.contains(&PREVIEW_FILE_NAME.to_string()));

        let preview = load_rgba(&output.preview_path(density));
        let size = density.pixel_size(108);
        assert_eq!(preview.dimensions(), (size, size));
        assert_eq!(preview.get_pixel(0, 0).0, [20, 40, 60, 255], "{density}");
        assert_eq!(preview.get_pixel(size / 2, size / 2).0, [20, 40, 60, 255], "{density}");
    }
}

#[test]
fn e2e_runs_are_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let icon = dir.path().join("icon.png");
    let img = RgbaImage::from_fn(90, 60, |x, y| Rgba([x as u8, y as u8, 128, 255]));
    write_png(&icon, &img);

    let first: Vec<_> = generate(dir.path(), &icon, None)
        .iter()
        .map(|p| load_rgba(p))
        .collect();
    let second: Vec<_> = generate(dir.path(), &icon, None)
        .iter()
        .map(|p| load_rgba(p))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn e2e_missing_source_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = SourceImage::open(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
    assert!(!err.is_recoverable());
}
