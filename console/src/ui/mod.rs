//! # Rendering Surface
//!
//! The controller never draws. It builds a [`Frame`] view model and hands it,
//! along with notifications, to whatever implements [`RenderSurface`].

pub mod command;
pub mod text;
pub mod views;

pub use command::{Command, HELP};
pub use text::TextSurface;
pub use views::{Frame, ScreenView};

use crate::app::state::Notification;
use crate::core::error::Result;

pub trait RenderSurface {
    /// Full redraw of the active screen
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Transient toast
    fn notify(&mut self, notification: &Notification) -> Result<()>;

    /// Local rejection of an operator action
    fn error(&mut self, message: &str) -> Result<()>;
}
