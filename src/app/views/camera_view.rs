use crate::app::views::View;
use crate::pipeline::types::{Color, GuideRect, Overlay, PixelPoint, Size, TextAnchor};
use crate::pipeline::RenderedFrame;
use egui::load::SizedTexture;
use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke, TextureHandle, TextureOptions, Vec2};

/// Glyph height in points for a text of size 1.0.
const TEXT_SCALE: f32 = 22.0;
const LANDMARK_RADIUS: f32 = 3.0;
const CLICK_MARKER_RADIUS: f32 = 15.0;

/// Maps frame pixels onto the rectangle the frame is drawn in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    origin: Pos2,
    scale: f32,
}

impl FrameTransform {
    /// Largest aspect-preserving fit of `frame` inside `available`.
    pub fn fit(frame: Size, available: Vec2, origin: Pos2) -> (Self, Vec2) {
        let width = frame.width.max(1) as f32;
        let height = frame.height.max(1) as f32;
        let scale = (available.x / width).min(available.y / height).max(0.0);
        (Self { origin, scale }, Vec2::new(width * scale, height * scale))
    }

    pub fn to_screen(&self, point: PixelPoint) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32 * self.scale,
            self.origin.y + point.y as f32 * self.scale,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

fn color(rgb: Color) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Shows the latest processed frame with its overlay painted on top.
#[derive(Default)]
pub struct CameraView {
    texture: Option<TextureHandle>,
    frame_size: Option<Size>,
    overlay: Overlay,
}

impl CameraView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_frame(&mut self, ctx: &egui::Context, rendered: RenderedFrame) {
        let image = rendered.frame.image();
        let size = Size::new(image.width(), image.height());
        let color_image = egui::ColorImage::from_rgb(
            [size.width as usize, size.height as usize],
            image.as_raw().as_slice(),
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("camera_frame", color_image, TextureOptions::LINEAR));
            }
        }
        self.frame_size = Some(size);
        self.overlay = rendered.overlay;
    }

    fn paint_overlay(&self, painter: &Painter, transform: FrameTransform, frame: Size) {
        let scale = transform.scale();

        if let Some(guide) = self.overlay.guide {
            paint_guide(painter, transform, guide);
        }

        if let Some(hand) = &self.overlay.skeleton {
            let bone = Stroke::new(2.0 * scale, Color32::from_rgb(0, 255, 0));
            for (from, to) in hand.bones() {
                painter.line_segment([transform.to_screen(from), transform.to_screen(to)], bone);
            }
            for landmark in hand.iter() {
                painter.circle_filled(
                    transform.to_screen(landmark.position),
                    LANDMARK_RADIUS * scale.max(0.5),
                    Color32::RED,
                );
            }
        }

        if let Some(marker) = self.overlay.click_marker {
            painter.circle_filled(
                transform.to_screen(marker),
                CLICK_MARKER_RADIUS * scale,
                Color32::from_rgb(0, 255, 0),
            );
        }

        for text in &self.overlay.texts {
            let (pos, align) = match text.anchor {
                TextAnchor::CenteredAt { y } => (
                    transform.to_screen(PixelPoint::new(frame.width as i32 / 2, y)),
                    Align2::CENTER_BOTTOM,
                ),
                TextAnchor::At { x, y } => (
                    transform.to_screen(PixelPoint::new(x, y)),
                    Align2::LEFT_BOTTOM,
                ),
            };
            painter.text(
                pos,
                align,
                &text.text,
                FontId::proportional(TEXT_SCALE * text.size * scale),
                color(text.color),
            );
        }
    }
}

fn paint_guide(painter: &Painter, transform: FrameTransform, guide: GuideRect) {
    let stroke = Stroke::new(2.0 * transform.scale(), Color32::from_rgb(255, 0, 255));
    let tl = guide.top_left;
    let br = guide.bottom_right;
    let corners = [
        PixelPoint::new(tl.x, tl.y),
        PixelPoint::new(br.x, tl.y),
        PixelPoint::new(br.x, br.y),
        PixelPoint::new(tl.x, br.y),
    ];
    for i in 0..corners.len() {
        let from = transform.to_screen(corners[i]);
        let to = transform.to_screen(corners[(i + 1) % corners.len()]);
        painter.line_segment([from, to], stroke);
    }
}

impl View for CameraView {
    fn draw(&mut self, ui: &mut egui::Ui) {
        let (Some(texture), Some(frame)) = (self.texture.as_ref(), self.frame_size) else {
            ui.centered_and_justified(|ui| ui.label("Waiting for camera..."));
            return;
        };

        let (_, display_size) = FrameTransform::fit(frame, ui.available_size(), Pos2::ZERO);
        let response = ui.add(egui::Image::from_texture(SizedTexture::new(
            texture.id(),
            display_size,
        )));
        let rect = response.rect;
        let (transform, _) = FrameTransform::fit(frame, rect.size(), rect.min);
        self.paint_overlay(&ui.painter_at(rect), transform, frame);
    }
}
