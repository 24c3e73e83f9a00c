use crate::error::PointerError;
use crate::pipeline::types::Size;
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings as EnigoSettings};
use tracing::{debug, info};

/// OS pointer injection.
pub trait PointerSink {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), PointerError>;
    fn click(&mut self) -> Result<(), PointerError>;
    fn screen_size(&self) -> Result<Size, PointerError>;
}

pub struct EnigoPointer {
    enigo: Enigo,
}

impl EnigoPointer {
    pub fn new() -> Result<Self, PointerError> {
        let enigo = Enigo::new(&EnigoSettings::default())
            .map_err(|e| PointerError::Connect(format!("{:?}", e)))?;
        Ok(Self { enigo })
    }
}

impl PointerSink for EnigoPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), PointerError> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| PointerError::Inject(format!("{:?}", e)))
    }

    fn click(&mut self) -> Result<(), PointerError> {
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| PointerError::Inject(format!("{:?}", e)))
    }

    fn screen_size(&self) -> Result<Size, PointerError> {
        let (width, height) = self
            .enigo
            .main_display()
            .map_err(|e| PointerError::ScreenSize(format!("{:?}", e)))?;
        Ok(Size::new(width.max(0) as u32, height.max(0) as u32))
    }
}

/// Logs pointer events instead of injecting them.
pub struct DryRunPointer {
    screen: Size,
}

impl DryRunPointer {
    pub fn new(screen: Size) -> Self {
        Self { screen }
    }
}

impl PointerSink for DryRunPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<(), PointerError> {
        debug!("[dry-run] move_to({}, {})", x, y);
        Ok(())
    }

    fn click(&mut self) -> Result<(), PointerError> {
        info!("[dry-run] click");
        Ok(())
    }

    fn screen_size(&self) -> Result<Size, PointerError> {
        Ok(self.screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_accepts_everything() {
        let mut pointer = DryRunPointer::new(Size::new(1920, 1080));
        assert!(pointer.move_to(-5, 99999).is_ok());
        assert!(pointer.click().is_ok());
        assert_eq!(pointer.screen_size().unwrap(), Size::new(1920, 1080));
    }
}
