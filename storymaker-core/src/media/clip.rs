//! Lazy clip description.
//!
//! A `Clip` records which part of a source should be encoded: a time interval
//! and an optional crop. Building one never touches the file; the toolkit
//! turns it into an encoder invocation in `MediaToolkit::write`.

use crate::error::{CoreError, CoreResult};
use crate::media::properties::VideoProperties;
use crate::media::toolkit::MediaSource;
use crate::processing::crop::CropRect;

use std::path::{Path, PathBuf};

// Absorbs float rounding in `start + duration` when the interval ends exactly
// at the end of the source.
const TIME_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    source_path: PathBuf,
    source: VideoProperties,
    start_secs: f64,
    end_secs: f64,
    crop: Option<CropRect>,
}

impl Clip {
    /// The whole source, uncropped.
    pub fn from_source<S: MediaSource + ?Sized>(source: &S) -> Self {
        let props = source.properties().clone();
        Self {
            source_path: source.path().to_path_buf(),
            start_secs: 0.0,
            end_secs: props.duration_secs,
            source: props,
            crop: None,
        }
    }

    /// Restricts the clip to `[start, end)`, measured from the start of this clip.
    ///
    /// Fails with `IntervalOutOfRange` if the interval is empty or not
    /// contained in this clip.
    pub fn subclip(&self, start: f64, end: f64) -> CoreResult<Clip> {
        let duration = self.duration_secs();
        let in_range = start.is_finite()
            && end.is_finite()
            && start >= 0.0
            && end > start
            && end <= duration + TIME_EPSILON;
        if !in_range {
            return Err(CoreError::IntervalOutOfRange {
                start,
                end,
                duration,
            });
        }

        Ok(Clip {
            start_secs: self.start_secs + start,
            end_secs: (self.start_secs + end).min(self.end_secs),
            ..self.clone()
        })
    }

    /// Crops the clip's current frame to `rect`.
    ///
    /// The rectangle is relative to the current frame, so cropping an already
    /// cropped clip composes the two.
    pub fn crop(&self, rect: CropRect) -> CoreResult<Clip> {
        let (frame_width, frame_height) = self.frame_size();
        if rect.x2 <= rect.x1 || rect.y2 <= rect.y1 {
            return Err(CoreError::InvalidCrop(format!("{rect:?} is empty")));
        }
        if rect.x2 > frame_width || rect.y2 > frame_height {
            return Err(CoreError::InvalidCrop(format!(
                "{rect:?} exceeds the {frame_width}x{frame_height} frame"
            )));
        }
        if rect.width() % 2 != 0 || rect.height() % 2 != 0 {
            return Err(CoreError::InvalidCrop(format!(
                "{}x{} is not even; yuv420p output needs even dimensions",
                rect.width(),
                rect.height()
            )));
        }

        let (offset_x, offset_y) = self.crop.map_or((0, 0), |c| (c.x1, c.y1));
        Ok(Clip {
            crop: Some(CropRect {
                x1: offset_x + rect.x1,
                y1: offset_y + rect.y1,
                x2: offset_x + rect.x2,
                y2: offset_y + rect.y2,
            }),
            ..self.clone()
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn source_properties(&self) -> &VideoProperties {
        &self.source
    }

    /// Offset into the source where the clip starts, in seconds.
    pub fn start_secs(&self) -> f64 {
        self.start_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }

    /// Crop in source coordinates, if any.
    pub fn crop_rect(&self) -> Option<CropRect> {
        self.crop
    }

    /// Output frame size after cropping.
    pub fn frame_size(&self) -> (u32, u32) {
        match self.crop {
            Some(rect) => (rect.width(), rect.height()),
            None => (self.source.width, self.source.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource {
        path: PathBuf,
        props: VideoProperties,
    }

    impl MediaSource for StaticSource {
        fn path(&self) -> &Path {
            &self.path
        }

        fn properties(&self) -> &VideoProperties {
            &self.props
        }

        fn close(&mut self) -> CoreResult<()> {
            Ok(())
        }
    }

    fn source(duration_secs: f64) -> StaticSource {
        StaticSource {
            path: PathBuf::from("/videos/clip.mp4"),
            props: VideoProperties {
                width: 1920,
                height: 1080,
                duration_secs,
            },
        }
    }

    #[test]
    fn test_full_clip_spans_source() {
        let clip = Clip::from_source(&source(30.0));
        assert_eq!(clip.start_secs(), 0.0);
        assert_eq!(clip.duration_secs(), 30.0);
        assert_eq!(clip.frame_size(), (1920, 1080));
        assert_eq!(clip.source_path(), Path::new("/videos/clip.mp4"));
    }

    #[test]
    fn test_subclip_within_range() {
        let clip = Clip::from_source(&source(30.0)).subclip(12.5, 27.5).unwrap();
        assert_eq!(clip.start_secs(), 12.5);
        assert_eq!(clip.duration_secs(), 15.0);

        let nested = clip.subclip(2.5, 5.0).unwrap();
        assert_eq!(nested.start_secs(), 15.0);
        assert_eq!(nested.duration_secs(), 2.5);
    }

    #[test]
    fn test_subclip_ending_at_source_end() {
        let clip = Clip::from_source(&source(30.0));
        let start = 30.0 - 17.0;
        assert!(clip.subclip(start, start + 17.0).is_ok());
    }

    #[test]
    fn test_subclip_out_of_range() {
        let clip = Clip::from_source(&source(5.0));
        assert!(matches!(
            clip.subclip(0.0, 12.0),
            Err(CoreError::IntervalOutOfRange { .. })
        ));
        assert!(clip.subclip(-1.0, 2.0).is_err());
        assert!(clip.subclip(3.0, 3.0).is_err());
        assert!(clip.subclip(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_crop_sets_frame_size() {
        let rect = CropRect { x1: 656, y1: 0, x2: 1262, y2: 1080 };
        let clip = Clip::from_source(&source(30.0)).crop(rect).unwrap();
        assert_eq!(clip.frame_size(), (606, 1080));
        assert_eq!(clip.crop_rect(), Some(rect));
    }

    #[test]
    fn test_crop_composes_offsets() {
        let clip = Clip::from_source(&source(30.0))
            .crop(CropRect { x1: 100, y1: 20, x2: 900, y2: 820 })
            .unwrap()
            .crop(CropRect { x1: 10, y1: 10, x2: 110, y2: 110 })
            .unwrap();
        assert_eq!(
            clip.crop_rect(),
            Some(CropRect { x1: 110, y1: 30, x2: 210, y2: 130 })
        );
    }

    #[test]
    fn test_crop_rejects_invalid_rectangles() {
        let clip = Clip::from_source(&source(30.0));
        // outside the frame
        assert!(clip.crop(CropRect { x1: 0, y1: 0, x2: 1922, y2: 1080 }).is_err());
        // odd width
        assert!(clip.crop(CropRect { x1: 0, y1: 0, x2: 607, y2: 1080 }).is_err());
        // empty
        assert!(matches!(
            clip.crop(CropRect { x1: 10, y1: 0, x2: 10, y2: 1080 }),
            Err(CoreError::InvalidCrop(_))
        ));
    }
}
