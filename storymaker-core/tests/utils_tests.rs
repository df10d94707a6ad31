// storymaker-core/tests/utils_tests.rs

use std::path::Path;
use storymaker_core::utils::{get_file_stem_safe, get_filename_safe};
use storymaker_core::{format_bytes, format_duration, parse_ffmpeg_time};

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0.0), "00:00:00");
    assert_eq!(format_duration(59.9), "00:00:59");
    assert_eq!(format_duration(60.0), "00:01:00");
    assert_eq!(format_duration(3599.0), "00:59:59");
    assert_eq!(format_duration(3725.0), "01:02:05");
    assert_eq!(format_duration(-1.0), "??:??:??");
    assert_eq!(format_duration(f64::NAN), "??:??:??");
}

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.00 KiB");
    assert_eq!(format_bytes(1536), "1.50 KiB");
    assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
    assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GiB");
    assert_eq!(format_bytes(1024 * 1024 * 1024 * 3 / 2), "1.50 GiB");
}

#[test]
fn test_parse_ffmpeg_time() {
    assert_eq!(parse_ffmpeg_time("00:00:12.50"), Some(12.5));
    assert_eq!(parse_ffmpeg_time("01:02:05.00"), Some(3725.0));
    assert_eq!(parse_ffmpeg_time("12.5"), None);
    assert_eq!(parse_ffmpeg_time("aa:bb:cc"), None);
}

#[test]
fn test_path_helpers() {
    let path = Path::new("/videos/holiday.final.mp4");
    assert_eq!(get_filename_safe(path).unwrap(), "holiday.final.mp4");
    assert_eq!(get_file_stem_safe(path).unwrap(), "holiday.final");
    assert!(get_file_stem_safe(Path::new("/")).is_err());
}
