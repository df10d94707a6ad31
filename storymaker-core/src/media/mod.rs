//! Media toolkit abstraction.
//!
//! The pipeline never decodes or encodes anything itself. It talks to a media
//! toolkit through the narrow `MediaToolkit` / `MediaSource` traits and
//! describes the work as `Clip` values, so the sampling and crop arithmetic
//! can be exercised without a real encoder.

pub mod clip;
pub mod properties;
pub mod toolkit;

pub use clip::Clip;
pub use properties::VideoProperties;
pub use toolkit::{MediaSource, MediaToolkit, SourceGuard};
