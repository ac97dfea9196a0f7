use crate::{ImageSettings, ImageValidationError, UploadedImage};

use std::result::Result as StdResult;

use image::{ImageFormat, ImageReader, Limits};

/// Bytes read from the upload when sniffing its format
const SNIFF_LEN: usize = 64;

/// Largest accepted width or height, in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 8192;

const FILE_CORRUPTED_SUFFIX: &str = "The file may be corrupted.";

/// Image formats accepted for profile pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
}

impl ImageKind {
    pub const ALL: [ImageKind; 3] = [ImageKind::Gif, ImageKind::Png, ImageKind::Jpeg];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageKind::Jpeg => &[".jpeg", ".jpg"],
            ImageKind::Png => &[".png"],
            ImageKind::Gif => &[".gif"],
        }
    }

    pub fn mimetypes(self) -> &'static [&'static str] {
        match self {
            ImageKind::Jpeg => &["image/jpeg", "image/pjpeg"],
            ImageKind::Png => &["image/png"],
            ImageKind::Gif => &["image/gif"],
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Png => Some(ImageKind::Png),
            ImageFormat::Gif => Some(ImageKind::Gif),
            _ => None,
        }
    }
}

/// Check an upload against the size limits and the accepted formats.
///
/// The format is decided by the file contents. The file name extension and
/// the declared `Content-Type` must both agree with it.
pub fn validate_uploaded_image(
    upload: &UploadedImage,
    settings: &ImageSettings,
) -> StdResult<ImageKind, ImageValidationError> {
    if upload.size() > settings.max_bytes {
        return Err(ImageValidationError::new(
            format!(
                "Upload of {} bytes exceeds the {} byte limit.",
                upload.size(),
                settings.max_bytes
            ),
            format!(
                "The file must be smaller than {} in size.",
                friendly_size(settings.max_bytes)
            ),
        ));
    }

    if upload.size() < settings.min_bytes {
        return Err(ImageValidationError::new(
            format!(
                "Upload of {} bytes is below the {} byte minimum.",
                upload.size(),
                settings.min_bytes
            ),
            format!(
                "The file must be at least {} in size.",
                friendly_size(settings.min_bytes)
            ),
        ));
    }

    let head = upload.head(SNIFF_LEN).map_err(|e| {
        log::error!("Could not read uploaded image: {e}");
        ImageValidationError::both(format!("The file could not be read. {FILE_CORRUPTED_SUFFIX}"))
    })?;

    let kind = image::guess_format(&head)
        .ok()
        .and_then(ImageKind::from_format)
        .ok_or_else(|| ImageValidationError::both(unsupported_type_message()))?;

    let extension_matches = upload.file_name().is_some_and(|name| {
        let name = name.to_lowercase();
        kind.extensions().iter().any(|ext| name.ends_with(ext))
    });
    if !extension_matches {
        return Err(ImageValidationError::both(format!(
            "The file name extension for this file does not match the file data. {FILE_CORRUPTED_SUFFIX}"
        )));
    }

    if let Some(content_type) = upload.content_type() {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if !kind.mimetypes().contains(&essence.as_str()) {
            return Err(ImageValidationError::both(format!(
                "The Content-Type header for this file does not match the file data. {FILE_CORRUPTED_SUFFIX}"
            )));
        }
    }

    let (width, height) = read_dimensions(upload)?;
    check_dimensions(width, height)?;

    Ok(kind)
}

/// Decoder limits applied whenever an upload is opened
pub(crate) fn image_limits() -> Limits {
    let mut limits = Limits::default();
    limits.max_image_width = Some(MAX_IMAGE_DIMENSION);
    limits.max_image_height = Some(MAX_IMAGE_DIMENSION);
    limits
}

/// Rejection for data that looks like an image but cannot be decoded
pub(crate) fn corrupted_image(detail: impl std::fmt::Display) -> ImageValidationError {
    ImageValidationError::new(
        format!("The image data could not be decoded: {detail}"),
        format!("The file could not be read as an image. {FILE_CORRUPTED_SUFFIX}"),
    )
}

fn read_dimensions(upload: &UploadedImage) -> StdResult<(u32, u32), ImageValidationError> {
    let mut reader = ImageReader::open(upload.path())
        .and_then(|reader| reader.with_guessed_format())
        .map_err(corrupted_image)?;
    reader.limits(image_limits());
    reader.into_dimensions().map_err(corrupted_image)
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> StdResult<(), ImageValidationError> {
    if width == 0 || height == 0 {
        return Err(corrupted_image(format!("empty {width}x{height} image")));
    }

    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(ImageValidationError::new(
            format!(
                "Image of {width}x{height} pixels exceeds the {MAX_IMAGE_DIMENSION} pixel limit."
            ),
            format!(
                "The image must be at most {MAX_IMAGE_DIMENSION} by {MAX_IMAGE_DIMENSION} pixels."
            ),
        ));
    }

    Ok(())
}

fn unsupported_type_message() -> String {
    let types = ImageKind::ALL
        .iter()
        .flat_map(|kind| kind.extensions().iter().copied())
        .collect::<Vec<_>>()
        .join(", ");
    format!("The file must be one of the following types: {types}.")
}

/// `1048576` -> `1 MB`, `100` -> `100 bytes`
fn friendly_size(bytes: u64) -> String {
    let mut size = bytes;
    let mut unit = "bytes";
    for next in ["KB", "MB", "GB"] {
        if size < 1024 {
            break;
        }
        size /= 1024;
        unit = next;
    }
    format!("{size} {unit}")
}
