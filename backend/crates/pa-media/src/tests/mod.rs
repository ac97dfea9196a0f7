
use crate::{ImageSettings, UploadedImage};

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

pub(crate) fn default_sizes() -> BTreeMap<String, u32> {
    BTreeMap::from([
        (String::from("full"), 500),
        (String::from("large"), 120),
        (String::from("medium"), 50),
        (String::from("small"), 30),
    ])
}

pub(crate) fn settings(storage_dir: &Path) -> ImageSettings {
    ImageSettings {
        storage_dir: storage_dir.to_path_buf(),
        secret_key: String::from("test-secret"),
        max_bytes: 1024 * 1024,
        min_bytes: 100,
        sizes: default_sizes(),
    }
}

/// Noisy pixels so the encoded file is not compressed below the minimum size
pub(crate) fn encoded_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let mut seed: u32 = 0x2545_f491;
    let img = RgbImage::from_fn(width, height, |_, _| {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let [a, b, c, _] = seed.to_le_bytes();
        Rgb([a, b, c])
    });

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub(crate) fn png_upload(file_name: &str, content_type: Option<&str>) -> UploadedImage {
    UploadedImage::from_bytes(
        Some(file_name.to_string()),
        content_type.map(str::to_string),
        &encoded_image(64, 64, ImageFormat::Png),
    )
    .unwrap()
}
