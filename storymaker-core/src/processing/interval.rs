//! Random snippet interval selection.
//!
//! The random source is passed in by the caller. A seeded `StdRng` gives
//! reproducible runs; the CLI seeds from OS entropy unless `--seed` is given.

use crate::error::{CoreError, CoreResult};

use rand::Rng;

/// Time interval of one snippet within the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnippetInterval {
    /// Offset into the source, in seconds
    pub start_secs: f64,

    /// Length of the snippet, in seconds
    pub duration_secs: f64,

    /// True when the sampled length exceeded the source and was cut down to it
    pub clamped: bool,
}

impl SnippetInterval {
    #[must_use]
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// Draws a snippet interval from a source of `source_duration` seconds.
///
/// The length is drawn uniformly from the whole seconds in `[min_secs, max_secs]`,
/// the start uniformly from `[0, source_duration - length]`. When the source
/// is shorter than the drawn length, the snippet covers the whole source.
pub fn sample_interval<R: Rng + ?Sized>(
    rng: &mut R,
    source_duration: f64,
    min_secs: u32,
    max_secs: u32,
) -> CoreResult<SnippetInterval> {
    if !source_duration.is_finite() || source_duration <= 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "Source duration must be positive, got {source_duration}"
        )));
    }
    if min_secs == 0 || min_secs > max_secs {
        return Err(CoreError::Config(format!(
            "Invalid snippet duration range {min_secs}..={max_secs}"
        )));
    }

    let sampled = rng.gen_range(min_secs..=max_secs);
    let duration = f64::from(sampled);

    if duration >= source_duration {
        if duration > source_duration {
            log::debug!(
                "Sampled {}s snippet exceeds the {:.3}s source, using the whole source",
                sampled,
                source_duration
            );
        }
        return Ok(SnippetInterval {
            start_secs: 0.0,
            duration_secs: source_duration,
            clamped: duration > source_duration,
        });
    }

    let max_start = source_duration - duration;
    let start_secs = rng.gen_range(0.0..=max_start);

    Ok(SnippetInterval {
        start_secs,
        duration_secs: duration,
        clamped: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_interval_stays_within_long_source() {
        let mut rng = StdRng::seed_from_u64(7);
        for source_duration in [20.0, 20.5, 30.0, 61.25, 3600.0] {
            for _ in 0..500 {
                let interval = sample_interval(&mut rng, source_duration, 10, 20).unwrap();
                assert!(interval.start_secs >= 0.0);
                assert!(interval.end_secs() <= source_duration + 1e-9);
                assert!((10.0..=20.0).contains(&interval.duration_secs));
                assert_eq!(interval.duration_secs.fract(), 0.0);
                assert!(!interval.clamped);
            }
        }
    }

    #[test]
    fn test_all_durations_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let interval = sample_interval(&mut rng, 120.0, 10, 20).unwrap();
            seen[interval.duration_secs as usize - 10] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_short_source_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let interval = sample_interval(&mut rng, 5.0, 10, 20).unwrap();
            assert_eq!(interval.start_secs, 0.0);
            assert_eq!(interval.duration_secs, 5.0);
            assert!(interval.clamped);
        }
    }

    #[test]
    fn test_source_equal_to_fixed_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let interval = sample_interval(&mut rng, 15.0, 15, 15).unwrap();
        assert_eq!(interval.start_secs, 0.0);
        assert_eq!(interval.duration_secs, 15.0);
        assert!(!interval.clamped);
    }

    #[test]
    fn test_same_seed_same_intervals() {
        let mut a = StdRng::seed_from_u64(2024);
        let mut b = StdRng::seed_from_u64(2024);
        for _ in 0..10 {
            assert_eq!(
                sample_interval(&mut a, 300.0, 10, 20).unwrap(),
                sample_interval(&mut b, 300.0, 10, 20).unwrap()
            );
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_interval(&mut rng, 0.0, 10, 20),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(sample_interval(&mut rng, f64::NAN, 10, 20).is_err());
        assert!(sample_interval(&mut rng, -3.0, 10, 20).is_err());
        assert!(matches!(
            sample_interval(&mut rng, 30.0, 20, 10),
            Err(CoreError::Config(_))
        ));
        assert!(sample_interval(&mut rng, 30.0, 0, 10).is_err());
    }
}
