/// Source of the cosmetic values attached to a document (difficulty labels,
/// reading and learning times). These never influence which sections are built.
use rand::seq::SliceRandom;
use rand::Rng;

pub const DIFFICULTY_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];
pub const READING_MINUTES: (u32, u32) = (5, 15);
pub const QUICK_DIFFICULTY: [&str; 3] = ["Easy", "Medium", "Hard"];
pub const TIME_TO_LEARN: [&str; 3] = ["1-2 hours", "3-4 hours", "5+ hours"];

pub trait RandomSource: Send + Sync {
    /// One of `options`, or `""` when there are none.
    fn pick(&self, options: &[&'static str]) -> &'static str;

    /// A value in `lo..=hi`.
    fn minutes(&self, lo: u32, hi: u32) -> u32;
}

/// Uniform draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        options
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }

    fn minutes(&self, lo: u32, hi: u32) -> u32 {
        rand::thread_rng().gen_range(lo..=hi.max(lo))
    }
}

/// Always answers with the same option index and minute count, clamped into range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom {
    pub index: usize,
    pub minutes: u32,
}

impl RandomSource for FixedRandom {
    fn pick(&self, options: &[&'static str]) -> &'static str {
        options
            .get(self.index.min(options.len().saturating_sub(1)))
            .copied()
            .unwrap_or_default()
    }

    fn minutes(&self, lo: u32, hi: u32) -> u32 {
        self.minutes.clamp(lo, hi.max(lo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_bounds() {
        let rng = ThreadRandom;
        for _ in 0..200 {
            assert!(DIFFICULTY_LEVELS.contains(&rng.pick(&DIFFICULTY_LEVELS)));
            let m = rng.minutes(READING_MINUTES.0, READING_MINUTES.1);
            assert!((5..=15).contains(&m));
        }
        assert_eq!(rng.pick(&[]), "");
    }

    #[test]
    fn fixed_random_clamps() {
        let rng = FixedRandom { index: 7, minutes: 99 };
        assert_eq!(rng.pick(&QUICK_DIFFICULTY), "Hard");
        assert_eq!(rng.minutes(5, 15), 15);
        assert_eq!(rng.pick(&[]), "");
        assert_eq!(FixedRandom::default().minutes(5, 15), 5);
    }
}
