//! Structure for source video metadata.

/// Metadata of an opened source video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoProperties {
    /// Width of the video in pixels
    pub width: u32,

    /// Height of the video in pixels
    pub height: u32,

    /// Duration of the video in seconds
    pub duration_secs: f64,
}
