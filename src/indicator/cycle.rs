//! Wraparound counter at the heart of the animation.

/// Bounded cycle position. Advances by one per tick and wraps back to zero
/// once the configured maximum has been reached, so a maximum of 3 yields
/// frame lengths 1, 2, 3, 0, 1, ...
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotCycle {
    count: u32,
}

impl DotCycle {
    /// Create a cycle at position zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Current position.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Advance one position, wrapping to zero once `max` is reached.
    /// Returns the new position. A `max` of zero pins the cycle at zero.
    pub fn advance(&mut self, max: u32) -> u32 {
        self.count = if self.count >= max { 0 } else { self.count + 1 };
        self.count
    }

    /// Render the current position as `glyph` repeated `count` times.
    #[must_use]
    pub fn frame(&self, glyph: char) -> String {
        std::iter::repeat(glyph).take(self.count as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let cycle = DotCycle::new();
        assert_eq!(cycle.count(), 0);
        assert_eq!(cycle.frame('.'), "");
    }

    #[test]
    fn test_advance_increments_until_max() {
        let mut cycle = DotCycle::new();
        assert_eq!(cycle.advance(3), 1);
        assert_eq!(cycle.advance(3), 2);
        assert_eq!(cycle.advance(3), 3);
    }

    #[test]
    fn test_advance_wraps_to_zero_at_max() {
        let mut cycle = DotCycle::new();
        for _ in 0..3 {
            cycle.advance(3);
        }
        assert_eq!(cycle.advance(3), 0);
    }

    #[test]
    fn test_wraparound_law_for_various_maxima() {
        // After max + 1 advances from zero, the position is back at zero.
        for max in 0..6 {
            let mut cycle = DotCycle::new();
            for _ in 0..=max {
                cycle.advance(max);
            }
            assert_eq!(cycle.count(), 0, "max = {max}");
        }
    }

    #[test]
    fn test_zero_max_pins_cycle_at_zero() {
        let mut cycle = DotCycle::new();
        for _ in 0..10 {
            assert_eq!(cycle.advance(0), 0);
            assert_eq!(cycle.frame('.'), "");
        }
    }

    #[test]
    fn test_frame_repeats_glyph_count_times() {
        let mut cycle = DotCycle::new();
        cycle.advance(5);
        cycle.advance(5);
        cycle.advance(5);
        assert_eq!(cycle.frame('.'), "...");
        assert_eq!(cycle.frame('*'), "***");
    }

    #[test]
    fn test_frame_length_always_equals_count() {
        let mut cycle = DotCycle::new();
        for _ in 0..20 {
            cycle.advance(4);
            assert_eq!(cycle.frame('x').len(), cycle.count() as usize);
        }
    }

    #[test]
    fn test_four_cycle_sequence() {
        let mut cycle = DotCycle::new();
        let frames: Vec<String> = (0..8).map(|_| {
            cycle.advance(3);
            cycle.frame('.')
        }).collect();
        assert_eq!(
            frames,
            vec![".", "..", "...", "", ".", "..", "...", ""]
        );
    }
}
