//! UI-facing state controllers for the kiosk.
//!
//! Each controller is owned by exactly one rendering component and mutated
//! only through its named operations; views read projections of the state
//! but never write it. Everything here runs on the single UI thread;
//! recurring timer callbacks are marshalled back onto that thread by the
//! backend bridge before they reach a controller.

pub mod carousel;
pub mod expansion;
pub mod navigation;

pub use carousel::{Carousel, CarouselError, DEFAULT_AUTO_ADVANCE_INTERVAL};
pub use expansion::MinistryExpansion;
pub use navigation::{NavEffect, NavigationController};

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod navigation_tests;

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod carousel_tests;

#[cfg(test)]
#[path = "tests/expansion_tests.rs"]
mod expansion_tests;
