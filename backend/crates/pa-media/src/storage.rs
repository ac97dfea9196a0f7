//! Profile image variants on the local filesystem.

use crate::validation::{corrupted_image, image_limits};
use crate::{
    ImageKind, ImageSettings, ImageValidationError, MediaError, ProfileImageNames, Result,
    UploadedImage, profile_image_names, validate_uploaded_image,
};

use std::fs;
use std::path::PathBuf;
use std::result::Result as StdResult;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

/// Image subsystem seam used by the HTTP handlers.
///
/// All methods block; callers run them on the blocking thread pool.
pub trait ProfileImageStorage: Send + Sync {
    fn names(&self, username: &str) -> ProfileImageNames;

    fn validate(&self, upload: &UploadedImage) -> StdResult<ImageKind, ImageValidationError>;

    /// Write one square JPEG per entry of `names`
    fn create(&self, upload: &UploadedImage, names: &ProfileImageNames) -> Result<()>;

    /// Delete the files in `names`; files that are already gone are skipped
    fn remove(&self, names: &ProfileImageNames) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSystemImageStorage {
    settings: ImageSettings,
}

impl FileSystemImageStorage {
    pub fn new(settings: ImageSettings) -> Self {
        Self { settings }
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.settings.storage_dir.join(file_name)
    }

    fn decode_square(&self, upload: &UploadedImage) -> Result<DynamicImage> {
        let mut reader = ImageReader::open(upload.path())
            .map_err(|e| MediaError::io(upload.path(), e))?
            .with_guessed_format()
            .map_err(|e| MediaError::io(upload.path(), e))?;
        reader.limits(image_limits());

        // Undecodable or truncated data is a client error
        let image = reader.decode().map_err(|e| match e {
            ImageError::Decoding(_) | ImageError::Limits(_) | ImageError::Unsupported(_) => {
                MediaError::Validation(corrupted_image(e))
            }
            ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                MediaError::Validation(corrupted_image(e))
            }
            other => MediaError::image(other),
        })?;

        let (width, height) = (image.width(), image.height());
        let side = width.min(height);
        Ok(image.crop_imm((width - side) / 2, (height - side) / 2, side, side))
    }
}

impl ProfileImageStorage for FileSystemImageStorage {
    fn names(&self, username: &str) -> ProfileImageNames {
        profile_image_names(&self.settings.secret_key, username, &self.settings.sizes)
    }

    fn validate(&self, upload: &UploadedImage) -> StdResult<ImageKind, ImageValidationError> {
        validate_uploaded_image(upload, &self.settings)
    }

    fn create(&self, upload: &UploadedImage, names: &ProfileImageNames) -> Result<()> {
        fs::create_dir_all(&self.settings.storage_dir)
            .map_err(|e| MediaError::io(&self.settings.storage_dir, e))?;

        let square = self.decode_square(upload)?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(names.len());
        for (size_name, file_name) in names {
            let Some(&px) = self.settings.sizes.get(size_name) else {
                log::warn!("No pixel size configured for profile image variant '{size_name}'");
                continue;
            };

            let path = self.path_for(file_name);
            let variant = DynamicImage::ImageRgb8(
                square.resize_exact(px, px, FilterType::Lanczos3).to_rgb8(),
            );
            if let Err(e) = variant.save_with_format(&path, ImageFormat::Jpeg) {
                discard(&written);
                return Err(MediaError::image(e));
            }
            written.push(path);
        }

        Ok(())
    }

    fn remove(&self, names: &ProfileImageNames) -> Result<()> {
        for file_name in names.values() {
            let path = self.path_for(file_name);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("Profile image {} already removed", path.display());
                }
                Err(e) => return Err(MediaError::io(path, e)),
            }
        }
        Ok(())
    }
}

/// Best-effort removal of variants written before a failure
fn discard(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = fs::remove_file(path) {
            log::warn!("Could not remove partial profile image {}: {e}", path.display());
        }
    }
}
