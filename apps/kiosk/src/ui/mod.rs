//! UI layer for the kiosk: app shell and section views.

pub mod app;
pub mod sections;

pub use app::KioskApp;
