//! Terminal host for the kiosk: renders scenes into a ratatui buffer and
//! feeds crossterm mouse input back to the director.

pub mod app;
pub mod event;
pub mod images;
pub mod platform;
pub mod surface;
pub mod viewport;

pub use app::App;
