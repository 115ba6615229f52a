use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use quadrant_tools::{process_image, Error};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn decode_output(path: &Path) -> (DynamicImage, Option<ImageFormat>) {
    let reader = image::io::Reader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap();
    let format = reader.format();
    (reader.decode().unwrap(), format)
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn four_colour_image(width: u32, height: u32) -> RgbImage {
    let colours = [[200, 20, 20], [20, 200, 20], [20, 20, 200], [200, 200, 20]];
    RgbImage::from_fn(width, height, |x, y| {
        let index = (x >= width / 2) as usize + 2 * (y >= height / 2) as usize;
        Rgb(colours[index])
    })
}

#[test]
fn jpeg_source_yields_jpeg_bytes_under_png_names() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("photo.jpg");
    DynamicImage::ImageRgb8(four_colour_image(640, 480))
        .save(&source)
        .unwrap();

    let written = process_image(&source, output.path(), 120).unwrap();

    assert_eq!(
        file_names(&written),
        vec![
            "photo_part1.png",
            "photo_part2.png",
            "photo_part3.png",
            "photo_part4.png"
        ]
    );
    for path in &written {
        let (image, format) = decode_output(path);
        assert_eq!(format, Some(ImageFormat::Jpeg));
        assert_eq!(image.dimensions(), (120, 120));
    }
}

#[test]
fn png_source_keeps_quadrant_order() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("tiles.png");
    DynamicImage::ImageRgb8(four_colour_image(101, 67))
        .save(&source)
        .unwrap();

    let written = process_image(&source, output.path(), 120).unwrap();

    let expected = [[200, 20, 20], [20, 200, 20], [20, 20, 200], [200, 200, 20]];
    for (path, colour) in written.iter().zip(expected) {
        let (image, format) = decode_output(path);
        assert_eq!(format, Some(ImageFormat::Png));
        assert_eq!(image.dimensions(), (120, 120));

        let centre = image.to_rgb8().get_pixel(60, 60).0;
        for (got, want) in centre.iter().zip(colour) {
            assert!(got.abs_diff(want) <= 3, "{:?} vs {:?}", centre, colour);
        }
    }
}

#[test]
fn gif_content_with_png_name_becomes_png() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("anim.png");
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255])))
        .save_with_format(&source, ImageFormat::Gif)
        .unwrap();

    let written = process_image(&source, output.path(), 120).unwrap();

    assert_eq!(written.len(), 4);
    for path in &written {
        let (image, format) = decode_output(path);
        assert_eq!(format, Some(ImageFormat::Png));
        assert_eq!(image.dimensions(), (120, 120));
    }
}

#[test]
fn single_pixel_source_still_writes_four_files() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("dot.png");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([1, 2, 3])))
        .save(&source)
        .unwrap();

    let written = process_image(&source, output.path(), 120).unwrap();

    assert_eq!(written.len(), 4);
    for path in &written {
        assert_eq!(decode_output(path).0.dimensions(), (120, 120));
    }
}

#[test]
fn corrupt_source_is_a_decode_error() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("broken.png");
    std::fs::write(&source, b"definitely not a png").unwrap();

    let err = process_image(&source, output.path(), 120).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err}");
    assert_eq!(err.path(), source.as_path());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn missing_output_dir_fails_on_first_quadrant() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("photo.png");
    DynamicImage::ImageRgb8(four_colour_image(8, 8))
        .save(&source)
        .unwrap();
    let missing = output.path().join("gone");

    let err = process_image(&source, &missing, 120).unwrap_err();

    assert!(matches!(err, Error::CreateOutput { .. }), "{err}");
    assert_eq!(err.path(), missing.join("photo_part1.png").as_path());
}

#[test]
fn failed_third_quadrant_keeps_earlier_parts() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join("photo.png");
    DynamicImage::ImageRgb8(four_colour_image(8, 8))
        .save(&source)
        .unwrap();
    let blocked = output.path().join("photo_part3.png");
    std::fs::create_dir(&blocked).unwrap();

    let err = process_image(&source, output.path(), 120).unwrap_err();

    assert!(matches!(err, Error::CreateOutput { .. }), "{err}");
    assert_eq!(err.path(), blocked.as_path());
    assert!(output.path().join("photo_part1.png").is_file());
    assert!(output.path().join("photo_part2.png").is_file());
    assert!(!output.path().join("photo_part4.png").exists());
}

#[test]
fn dotfile_named_like_an_extension_gets_empty_base() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let source = input.path().join(".jpg");
    DynamicImage::ImageRgb8(four_colour_image(8, 8))
        .save_with_format(&source, ImageFormat::Jpeg)
        .unwrap();

    let written = process_image(&source, output.path(), 120).unwrap();

    assert_eq!(
        file_names(&written),
        vec!["_part1.png", "_part2.png", "_part3.png", "_part4.png"]
    );
}
