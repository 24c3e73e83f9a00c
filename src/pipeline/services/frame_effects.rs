use image::imageops::{self, FilterType};
use image::RgbImage;

/// Weight of the camera image when the black veil is blended over it.
const MENU_BRIGHTNESS: f32 = 0.6;
/// Gaussian sigma at full resolution (a 51 px kernel).
const MENU_BLUR_SIGMA: f32 = 8.0;
const MENU_DOWNSCALE: u32 = 4;

/// Selfie view: flip left and right.
pub fn mirror(image: &RgbImage) -> RgbImage {
    imageops::flip_horizontal(image)
}

/// Blurred, darkened backdrop shown behind the menu text.
pub fn menu_backdrop(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    // Blur a downscaled copy for speed, then scale back up.
    let small_w = (width / MENU_DOWNSCALE).max(1);
    let small_h = (height / MENU_DOWNSCALE).max(1);
    let small = imageops::resize(image, small_w, small_h, FilterType::Triangle);
    let blurred = imageops::blur(&small, MENU_BLUR_SIGMA / MENU_DOWNSCALE as f32);
    let mut backdrop = imageops::resize(&blurred, width, height, FilterType::Triangle);
    darken(&mut backdrop, MENU_BRIGHTNESS);
    backdrop
}

fn darken(image: &mut RgbImage, brightness: f32) {
    for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = (f32::from(*channel) * brightness).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn mirror_swaps_left_and_right() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        img.put_pixel(0, 1, Rgb([255, 0, 0]));
        let mirrored = mirror(&img);
        assert_eq!(mirrored.get_pixel(3, 1), &Rgb([255, 0, 0]));
        assert_eq!(mirrored.get_pixel(0, 1), &Rgb([0, 0, 0]));
    }

    #[test]
    fn backdrop_keeps_size_and_darkens_flat_images() {
        let img = RgbImage::from_pixel(64, 48, Rgb([200, 100, 50]));
        let backdrop = menu_backdrop(&img);
        assert_eq!(backdrop.dimensions(), (64, 48));
        let center = backdrop.get_pixel(32, 24);
        assert!((i32::from(center[0]) - 120).abs() <= 2, "{:?}", center);
        assert!((i32::from(center[1]) - 60).abs() <= 2, "{:?}", center);
        assert!((i32::from(center[2]) - 30).abs() <= 2, "{:?}", center);
    }

    #[test]
    fn backdrop_softens_hard_edges() {
        let mut img = RgbImage::from_pixel(64, 48, Rgb([0, 0, 0]));
        for y in 0..48 {
            for x in 32..64 {
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let backdrop = menu_backdrop(&img);
        let left = backdrop.get_pixel(31, 24)[0];
        let right = backdrop.get_pixel(32, 24)[0];
        assert!(left > 0, "edge was not blurred");
        assert!(right < 153, "edge was not blurred");
    }
}
