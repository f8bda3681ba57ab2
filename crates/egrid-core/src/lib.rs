// ABOUTME: Shared types for the even-grid workspace.
// ABOUTME: Defines geometry, alignment, and grid configuration handling.

pub mod alignment;
pub mod config;
pub mod geometry;

pub use alignment::{Alignment, Axis};
pub use config::{ConfigError, GridConfig};
pub use geometry::{Rect, Size};
