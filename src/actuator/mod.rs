//! Cursor injection
//!
//! The pipeline only ever needs three operations: report the screen size,
//! move the cursor to an absolute position, and perform a left click.
//! [`cursor::CursorActuator`] is that seam; [`system::SystemCursor`] is the
//! real backend and [`system::DryRunCursor`] a logging stand-in.

pub mod cursor;
pub mod system;

pub use cursor::{CursorActuator, ScreenSize};
pub use system::{DryRunCursor, SystemCursor};
