//! Cursor backends
//!
//! [`SystemCursor`] injects real input through `enigo`. [`DryRunCursor`]
//! logs what would have happened and counts calls; `probe` and `--dry-run`
//! use it so a misbehaving detector cannot fight the user for the mouse.

use crate::actuator::cursor::{CursorActuator, ScreenSize};
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
use tracing::debug;

/// System cursor control via `enigo`
pub struct SystemCursor {
    enigo: Enigo,
}

impl SystemCursor {
    pub fn new() -> crate::Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| crate::Error::Actuator(format!("failed to connect to display: {e:?}")))?;
        Ok(Self { enigo })
    }
}

impl CursorActuator for SystemCursor {
    fn screen_size(&self) -> crate::Result<ScreenSize> {
        let (width, height) = self
            .enigo
            .main_display()
            .map_err(|e| crate::Error::Actuator(format!("failed to query display size: {e:?}")))?;
        if width <= 0 || height <= 0 {
            return Err(crate::Error::Actuator(format!(
                "display reported degenerate size {width}x{height}"
            )));
        }
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    fn move_to(&mut self, x: f64, y: f64) -> crate::Result<()> {
        self.enigo
            .move_mouse(x.round() as i32, y.round() as i32, Coordinate::Abs)
            .map_err(|e| crate::Error::Actuator(format!("move to ({x:.1}, {y:.1}): {e:?}")))
    }

    fn click(&mut self) -> crate::Result<()> {
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| crate::Error::Actuator(format!("left click: {e:?}")))
    }
}

/// Logging-only actuator for probe and dry-run modes
#[derive(Debug, Clone)]
pub struct DryRunCursor {
    screen: ScreenSize,
    moves: u64,
    clicks: u64,
}

impl DryRunCursor {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            moves: 0,
            clicks: 0,
        }
    }

    /// Moves recorded so far
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Clicks recorded so far
    pub fn clicks(&self) -> u64 {
        self.clicks
    }
}

impl CursorActuator for DryRunCursor {
    fn screen_size(&self) -> crate::Result<ScreenSize> {
        Ok(self.screen)
    }

    fn move_to(&mut self, x: f64, y: f64) -> crate::Result<()> {
        self.moves += 1;
        debug!("dry-run: move to ({:.1}, {:.1})", x, y);
        Ok(())
    }

    fn click(&mut self) -> crate::Result<()> {
        self.clicks += 1;
        debug!("dry-run: left click");
        Ok(())
    }
}
