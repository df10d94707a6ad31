//! Capability traits for the external media toolkit and the scoped source handle.

use crate::config::CodecOptions;
use crate::error::CoreResult;
use crate::media::clip::Clip;
use crate::media::properties::VideoProperties;

use std::ops::Deref;
use std::path::Path;

/// An opened source video.
pub trait MediaSource {
    /// Path the source was opened from.
    fn path(&self) -> &Path;

    /// Duration and frame size of the source.
    fn properties(&self) -> &VideoProperties;

    /// Releases whatever the toolkit holds for this source.
    fn close(&mut self) -> CoreResult<()>;
}

/// The operations the snippet pipeline needs from a media toolkit.
///
/// Interval extraction and cropping are expressed on `Clip` values; only
/// `write` actually runs the encoder.
pub trait MediaToolkit {
    type Source: MediaSource;

    /// Opens `path` as a video and reads its properties.
    fn open(&self, path: &Path) -> CoreResult<Self::Source>;

    /// Encodes `clip` into `output_path`, replacing any existing file.
    fn write(&self, clip: &Clip, output_path: &Path, codec: &CodecOptions) -> CoreResult<()>;
}

/// Owns an open `MediaSource` and closes it exactly once.
///
/// Call `close` on the success path to observe close errors. If the guard is
/// dropped without that (an iteration failed and `?` unwound the loop), the
/// source is closed in `Drop` and any close error is logged.
pub struct SourceGuard<S: MediaSource> {
    source: S,
    closed: bool,
}

impl<S: MediaSource> SourceGuard<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            closed: false,
        }
    }

    /// Closes the source, consuming the guard.
    pub fn close(mut self) -> CoreResult<()> {
        self.closed = true;
        log::debug!("Closing source {}", self.source.path().display());
        self.source.close()
    }
}

impl<S: MediaSource> Deref for SourceGuard<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.source
    }
}

impl<S: MediaSource> Drop for SourceGuard<S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        log::debug!(
            "Closing source {} after an aborted run",
            self.source.path().display()
        );
        if let Err(e) = self.source.close() {
            log::warn!(
                "Failed to close source {}: {}",
                self.source.path().display(),
                e
            );
        }
    }
}
