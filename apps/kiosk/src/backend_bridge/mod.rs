//! Bridge between the UI thread and the background worker that loads content
//! and drives the news ticker.

pub mod commands;
pub mod runtime;
