//! Commands queued from the UI to the backend worker.

use std::path::PathBuf;
use std::time::Duration;

pub enum BackendCommand {
    /// Load and validate the fixture documents. `None` uses the fixtures
    /// embedded in the binary.
    LoadContent { content_dir: Option<PathBuf> },
    /// Begin (or restart) the recurring news tick. With `slide_count == 0`
    /// no ticker is scheduled at all.
    StartNewsTicker {
        interval: Duration,
        slide_count: usize,
    },
    /// Cancel the pending ticker. A no-op when none is running.
    StopNewsTicker,
}
