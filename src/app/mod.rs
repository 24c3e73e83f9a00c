pub mod gesture_app;
pub mod views;

pub use gesture_app::GestureApp;
pub use views::camera_view::CameraView;
