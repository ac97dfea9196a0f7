mod error;
mod names;
mod settings;
mod storage;
mod upload;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ImageValidationError, MediaError, Result};
pub use names::{ProfileImageNames, profile_image_names};
pub use settings::ImageSettings;
pub use storage::{FileSystemImageStorage, ProfileImageStorage};
pub use upload::UploadedImage;
pub use validation::{ImageKind, MAX_IMAGE_DIMENSION, validate_uploaded_image};
