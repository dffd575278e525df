//! Staggered stop plan
//!
//! Stopping does not freeze the whole row at once. Slots freeze one at a time
//! from the left, and the slots still moving tick a few more times before the
//! next one locks. Stage `k` keeps the trailing `slot_count - 1 - k` slots moving
//! and starts at `k * ticks * spin_delay_ms`, so start times are fixed up front
//! rather than chained on earlier ticks.

/// One phase of the stop animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopStage {
    /// Offset from the stop request, in milliseconds
    pub start_ms: u32,
    /// Index of the first slot still moving; everything before it is frozen
    pub first_active: usize,
    /// Number of ticks written during this stage
    pub ticks: u32,
}

impl StopStage {
    /// Offsets of every tick in this stage, relative to the stop request
    pub fn tick_offsets(&self, spin_delay_ms: u32) -> impl Iterator<Item = u32> + '_ {
        let start = self.start_ms;
        (0..self.ticks).map(move |j| start.saturating_add(j.saturating_mul(spin_delay_ms)))
    }
}

/// Build the stop plan for `slot_count` slots
///
/// Yields `slot_count - 1` stages; zero or one slot means nothing to animate.
pub fn stop_stages(slot_count: usize, ticks: u32, spin_delay_ms: u32) -> Vec<StopStage> {
    let stage_len = ticks.saturating_mul(spin_delay_ms);
    (1..slot_count)
        .rev()
        .enumerate()
        .map(|(k, remaining)| StopStage {
            start_ms: stage_len.saturating_mul(k as u32),
            first_active: slot_count - remaining,
            ticks,
        })
        .collect()
}

/// Total time from the stop request until the last slot freezes
pub fn stop_duration_ms(slot_count: usize, ticks: u32, spin_delay_ms: u32) -> u32 {
    let stages = slot_count.saturating_sub(1) as u32;
    stages.saturating_mul(ticks).saturating_mul(spin_delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_count() {
        assert!(stop_stages(0, 5, 100).is_empty());
        assert!(stop_stages(1, 5, 100).is_empty());
        for n in 2..10 {
            assert_eq!(stop_stages(n, 5, 100).len(), n - 1);
        }
    }

    #[test]
    fn test_three_slot_plan() {
        let stages = stop_stages(3, 5, 100);
        assert_eq!(
            stages,
            vec![
                StopStage { start_ms: 0, first_active: 1, ticks: 5 },
                StopStage { start_ms: 500, first_active: 2, ticks: 5 },
            ]
        );
    }

    #[test]
    fn test_active_range_shrinks_by_one() {
        let stages = stop_stages(6, 4, 50);
        for (k, stage) in stages.iter().enumerate() {
            assert_eq!(stage.first_active, k + 1);
            assert_eq!(stage.start_ms, k as u32 * 200);
        }
        assert_eq!(stages.last().map(|s| s.first_active), Some(5));
    }

    #[test]
    fn test_tick_offsets() {
        let stage = StopStage { start_ms: 500, first_active: 2, ticks: 5 };
        let offsets: Vec<u32> = stage.tick_offsets(100).collect();
        assert_eq!(offsets, vec![500, 600, 700, 800, 900]);
    }

    #[test]
    fn test_stages_do_not_overlap() {
        let stages = stop_stages(5, 5, 100);
        for pair in stages.windows(2) {
            let last_tick = pair[0].tick_offsets(100).last().unwrap();
            assert!(last_tick < pair[1].start_ms);
        }
    }

    #[test]
    fn test_stop_duration() {
        assert_eq!(stop_duration_ms(3, 5, 100), 1000);
        assert_eq!(stop_duration_ms(1, 5, 100), 0);
        assert_eq!(stop_duration_ms(0, 5, 100), 0);
    }
}
