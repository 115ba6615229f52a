use crate::error::{Error, Result};
use crate::geometry::{quadrants, Rect};
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, ImageOutputFormat, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const JPEG_QUALITY: u8 = 75;
pub const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Encoding used for the quadrant files of one source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputEncoding {
    Jpeg,
    Png,
}

impl OutputEncoding {
    /// JPEG sources stay JPEG, every other family becomes PNG.
    pub fn for_source(format: Option<ImageFormat>) -> Self {
        match format {
            Some(ImageFormat::Jpeg) => OutputEncoding::Jpeg,
            _ => OutputEncoding::Png,
        }
    }

    fn write<W: Write + std::io::Seek>(
        self,
        image: &DynamicImage,
        writer: &mut W,
    ) -> image::ImageResult<()> {
        match self {
            // The JPEG encoder has no alpha channel.
            OutputEncoding::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
                .write_to(writer, ImageOutputFormat::Jpeg(JPEG_QUALITY)),
            OutputEncoding::Png => image.write_to(writer, ImageOutputFormat::Png),
        }
    }
}

/// Name of the `index`th (1-based) quadrant file.
///
/// The suffix is always `.png`, including when the bytes are JPEG.
pub fn output_file_name(base_name: &str, index: usize) -> String {
    format!("{}_part{}.png", base_name, index)
}

/// Final extension of `path`, without the dot.
///
/// A name made only of a leading dot and a suffix (`.jpg`) counts as all
/// extension, with an empty base name.
pub fn extension(path: &Path) -> Option<String> {
    if let Some(ext) = path.extension() {
        return Some(ext.to_string_lossy().into_owned());
    }

    let name = path.file_name()?.to_string_lossy();
    name.strip_prefix('.').map(str::to_owned)
}

/// File name without its final extension.
pub fn base_name(path: &Path) -> String {
    if path.extension().is_none() {
        if let Some(name) = path.file_name() {
            if name.to_string_lossy().starts_with('.') {
                return String::new();
            }
        }
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn resize_quadrant(image: &DynamicImage, rect: Rect, edge: u32) -> DynamicImage {
    if rect.is_empty() {
        return DynamicImage::ImageRgba8(RgbaImage::new(edge, edge));
    }

    image
        .crop_imm(rect.x, rect.y, rect.width, rect.height)
        .resize_exact(edge, edge, RESAMPLING_FILTER)
}

/// Cuts `image` into its four quadrants and stretches each to `edge` x `edge`.
pub fn split_image(image: &DynamicImage, edge: u32) -> [DynamicImage; 4] {
    quadrants(image.width(), image.height()).map(|rect| resize_quadrant(image, rect, edge))
}

fn decode(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>)> {
    let decode_error = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| decode_error(ImageError::IoError(err)))?;
    let format = reader.format();
    let image = reader.decode().map_err(decode_error)?;

    Ok((image, format))
}

fn write_quadrant(image: &DynamicImage, path: &Path, encoding: OutputEncoding) -> Result<()> {
    let encode_error = |source: ImageError| Error::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    encoding.write(image, &mut writer).map_err(encode_error)?;
    writer
        .flush()
        .map_err(|err| encode_error(ImageError::IoError(err)))?;

    Ok(())
}

/// Decodes `source`, writes its four thumbnails into `output_dir` and returns
/// their paths in quadrant order.
///
/// Quadrants are written one after the other; a failure leaves the earlier
/// ones on disk.
pub fn process_image(source: &Path, output_dir: &Path, edge: u32) -> Result<Vec<PathBuf>> {
    let (image, format) = decode(source)?;
    let encoding = OutputEncoding::for_source(format);
    let base_name = base_name(source);

    tracing::debug!(
        "decoded {} ({}x{}, {:?}) -> {:?}",
        source.display(),
        image.width(),
        image.height(),
        format,
        encoding
    );

    let mut written = Vec::with_capacity(4);

    for (i, quadrant) in split_image(&image, edge).iter().enumerate() {
        let path = output_dir.join(output_file_name(&base_name, i + 1));
        write_quadrant(quadrant, &path, encoding)?;
        tracing::debug!("wrote {}", path.display());
        written.push(path);
    }

    println!("✅ Processed: {}", base_name);

    Ok(written)
}
