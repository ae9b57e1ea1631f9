/// Slot thumbnails
///
/// Chosen photos are decoded once on a blocking worker, cropped to fill the
/// slot's aspect ratio and handed to iced as raw RGBA pixels.

use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, RgbaImage};
use std::path::Path;

use crate::error::ThumbnailError;
use crate::state::data::ImageRef;

/// Render `reference` as a `width` x `height` thumbnail
pub async fn load_thumbnail(
    reference: ImageRef,
    width: u32,
    height: u32,
) -> Result<Handle, ThumbnailError> {
    // Spawn blocking task for CPU-bound work
    tokio::task::spawn_blocking(move || load_thumbnail_blocking(&reference.to_path(), width, height))
        .await?
}

/// Blocking version of thumbnail generation
fn load_thumbnail_blocking(path: &Path, width: u32, height: u32) -> Result<Handle, ThumbnailError> {
    let img = image::open(path).map_err(|source| ThumbnailError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let thumb = fit_to_slot(&img, width, height);
    tracing::debug!("🖼️ thumbnail {}x{} for {}", thumb.width(), thumb.height(), path.display());

    Ok(Handle::from_rgba(thumb.width(), thumb.height(), thumb.into_raw()))
}

/// Scale and center-crop so the result exactly covers the slot
pub fn fit_to_slot(img: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    img.resize_to_fill(width, height, FilterType::Lanczos3).to_rgba8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_to_slot_landscape() {
        let img = DynamicImage::new_rgb8(400, 300);
        let thumb = fit_to_slot(&img, 100, 150);

        assert_eq!(thumb.dimensions(), (100, 150));
        assert_eq!(thumb.as_raw().len(), 100 * 150 * 4);
    }

    #[test]
    fn test_fit_to_slot_small_source_is_upscaled() {
        let img = DynamicImage::new_rgba8(20, 20);
        let thumb = fit_to_slot(&img, 200, 300);

        assert_eq!(thumb.dimensions(), (200, 300));
    }

    #[tokio::test]
    async fn test_missing_file_is_decode_error() {
        let reference = ImageRef::from("file:///definitely/not/here.jpg");

        let result = load_thumbnail(reference, 100, 150).await;

        assert!(matches!(result, Err(ThumbnailError::Decode { .. })));
    }
}
