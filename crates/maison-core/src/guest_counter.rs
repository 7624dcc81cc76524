use maison_domain::{Direction, GuestCounts, GuestKind};

/// Saturating +/- counters for the party composition.
pub struct GuestCounter;

impl GuestCounter {
    /// Applies one step in `direction`. At a bound the counts come back
    /// unchanged.
    pub fn change_guest_count(
        counts: GuestCounts,
        kind: GuestKind,
        direction: Direction,
    ) -> GuestCounts {
        if !Self::can_change(counts, kind, direction) {
            return counts;
        }
        let current = counts.get(kind);
        let next = match direction {
            Direction::Increment => current + 1,
            Direction::Decrement => current - 1,
        };
        counts.with(kind, next)
    }

    /// Sets an absolute count, clamped into the bounds for `kind`.
    pub fn set_guest_count(counts: GuestCounts, kind: GuestKind, value: u8) -> GuestCounts {
        counts.with(kind, value)
    }

    /// Whether the +/- control for `kind` should be enabled.
    pub fn can_change(counts: GuestCounts, kind: GuestKind, direction: Direction) -> bool {
        let (min, max) = kind.bounds();
        let current = counts.get(kind);
        match direction {
            Direction::Increment => current < max,
            Direction::Decrement => current > min,
        }
    }
}

#[cfg(test)]
mod tests {
    use maison_domain::{ADULTS_MAX, ADULTS_MIN, CHILDREN_MAX, CHILDREN_MIN};

    use super::*;

    #[test]
    fn increment_at_ceiling_is_a_no_op() {
        let counts = GuestCounts::new(6, 0);
        let next = GuestCounter::change_guest_count(counts, GuestKind::Adults, Direction::Increment);
        assert_eq!(next.adults(), 6);
    }

    #[test]
    fn decrement_at_floor_is_a_no_op() {
        let counts = GuestCounts::new(1, 0);
        let next = GuestCounter::change_guest_count(counts, GuestKind::Adults, Direction::Decrement);
        assert_eq!(next.adults(), 1);
        let next = GuestCounter::change_guest_count(next, GuestKind::Children, Direction::Decrement);
        assert_eq!(next.children(), 0);
    }

    #[test]
    fn changing_one_kind_leaves_the_other_alone() {
        let counts = GuestCounts::new(2, 1);
        let next = GuestCounter::change_guest_count(counts, GuestKind::Children, Direction::Increment);
        assert_eq!(next, GuestCounts::new(2, 2));
    }

    #[test]
    fn arbitrary_sequences_stay_in_bounds() {
        let kinds = [GuestKind::Adults, GuestKind::Children];
        let directions = [Direction::Increment, Direction::Decrement];
        let mut counts = GuestCounts::default();
        // Deterministic pseudo-random walk, biased by the step index.
        let mut seed: u32 = 0x9E37_79B9;
        for step in 0..2_000u32 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let kind = kinds[(seed >> 16) as usize % 2];
            let direction = if step % 500 < 250 {
                directions[((seed >> 8) % 4 == 0) as usize]
            } else {
                directions[((seed >> 8) % 4 != 0) as usize]
            };
            counts = GuestCounter::change_guest_count(counts, kind, direction);
            assert!((ADULTS_MIN..=ADULTS_MAX).contains(&counts.adults()));
            assert!((CHILDREN_MIN..=CHILDREN_MAX).contains(&counts.children()));
        }
    }

    #[test]
    fn controls_disable_at_bounds() {
        let counts = GuestCounts::new(1, 4);
        assert!(!GuestCounter::can_change(counts, GuestKind::Adults, Direction::Decrement));
        assert!(GuestCounter::can_change(counts, GuestKind::Adults, Direction::Increment));
        assert!(!GuestCounter::can_change(counts, GuestKind::Children, Direction::Increment));
    }

    #[test]
    fn absolute_values_are_clamped() {
        let counts = GuestCounter::set_guest_count(GuestCounts::default(), GuestKind::Children, 9);
        assert_eq!(counts.children(), CHILDREN_MAX);
        let counts = GuestCounter::set_guest_count(counts, GuestKind::Adults, 0);
        assert_eq!(counts.adults(), ADULTS_MIN);
    }
}
