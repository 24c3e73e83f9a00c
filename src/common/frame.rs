use chrono::{DateTime, Utc};
use image::RgbImage;
use std::sync::Arc;
use uuid::Uuid;

/// One captured camera image, already converted to RGB.
#[derive(Clone)]
pub struct Frame {
    image: Arc<RgbImage>,
    captured_at: DateTime<Utc>,
    frame_id: Uuid,
}

impl Frame {
    pub fn new(image: RgbImage, captured_at: DateTime<Utc>, frame_id: Uuid) -> Self {
        Self {
            image: Arc::new(image),
            captured_at,
            frame_id,
        }
    }

    pub fn now(image: RgbImage) -> Self {
        Self::new(image, Utc::now(), Uuid::new_v4())
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    /// Replaces the pixels while keeping the capture identity.
    pub fn with_image(&self, image: RgbImage) -> Self {
        Self {
            image: Arc::new(image),
            captured_at: self.captured_at,
            frame_id: self.frame_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn cloning_frame_shares_image_buffer() {
        let img = RgbImage::from_pixel(16, 16, Rgb([1, 2, 3]));
        let f1 = Frame::now(img);
        let f2 = f1.clone();
        assert!(Arc::ptr_eq(&f1.image, &f2.image));
    }

    #[test]
    fn with_image_keeps_identity() {
        let f1 = Frame::now(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));
        let f2 = f1.with_image(RgbImage::from_pixel(8, 2, Rgb([9, 9, 9])));
        assert_eq!(f1.frame_id(), f2.frame_id());
        assert_eq!(f1.captured_at(), f2.captured_at());
        assert_eq!((f2.width(), f2.height()), (8, 2));
    }
}
