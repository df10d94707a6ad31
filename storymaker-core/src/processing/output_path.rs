//! Output file naming.
//!
//! Snippets are named `{stem}__{W}x{H}__{NN}.{ext}`, where `NN` is the
//! 1-based index padded to two digits. Names depend only on the input stem,
//! the ratio and the index, so a rerun overwrites the previous snippets.

use crate::config::AspectRatio;
use crate::error::CoreResult;
use crate::utils::get_file_stem_safe;

use std::path::{Path, PathBuf};

/// Builds the snippet file name for `index` (1-based).
#[must_use]
pub fn snippet_file_name(stem: &str, ratio: AspectRatio, index: usize, extension: &str) -> String {
    format!("{stem}__{ratio}__{index:02}.{extension}")
}

/// Resolves the full output path of snippet `index` for `input_path`.
pub fn snippet_output_path(
    output_dir: &Path,
    input_path: &Path,
    ratio: AspectRatio,
    index: usize,
    extension: &str,
) -> CoreResult<PathBuf> {
    let stem = get_file_stem_safe(input_path)?;
    Ok(output_dir.join(snippet_file_name(&stem, ratio, index, extension)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTICAL: AspectRatio = AspectRatio { width: 9, height: 16 };

    #[test]
    fn test_file_name_pads_index() {
        assert_eq!(snippet_file_name("clip", VERTICAL, 2, "mov"), "clip__9x16__02.mov");
        assert_eq!(snippet_file_name("clip", VERTICAL, 10, "mov"), "clip__9x16__10.mov");
        assert_eq!(snippet_file_name("clip", VERTICAL, 123, "mov"), "clip__9x16__123.mov");
    }

    #[test]
    fn test_output_path_uses_input_stem() {
        let path = snippet_output_path(
            Path::new("output_videos"),
            Path::new("/home/me/Movies/clip.mp4"),
            VERTICAL,
            1,
            "mov",
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("output_videos/clip__9x16__01.mov"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let ratio = AspectRatio { width: 4, height: 5 };
        let path = snippet_output_path(Path::new("out"), Path::new("trip.day1.mkv"), ratio, 3, "mov")
            .unwrap();
        assert_eq!(path, PathBuf::from("out/trip.day1__4x5__03.mov"));
    }
}
