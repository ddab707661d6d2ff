//! Single-slot frame debouncer.
//!
//! Collapses a burst of trigger events into at most one deferred action
//! per rendering frame: `schedule` succeeds only while no run is pending,
//! and `take` clears the slot when the frame callback fires. The caller
//! requests the animation frame iff `schedule` returned true.

#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: bool,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule-if-absent. Returns true when the caller must request a
    /// frame callback; returns false (and does nothing) while one is
    /// already pending.
    pub fn schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Clear-on-run. Called at the top of the frame callback; returns
    /// whether a run was actually pending (false indicates a spurious
    /// callback and the caller should skip the recomputation).
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_of_notifications_schedules_exactly_one_run() {
        let mut slot = FrameSlot::new();
        let requested: usize = (0..10).filter(|_| slot.schedule()).count();
        assert_eq!(requested, 1);
        assert!(slot.is_pending());
    }

    #[test]
    fn take_clears_the_slot_and_reports_the_pending_run() {
        let mut slot = FrameSlot::new();
        assert!(slot.schedule());
        assert!(slot.take());
        assert!(!slot.is_pending());
        // Spurious second callback: nothing was pending.
        assert!(!slot.take());
    }

    #[test]
    fn slot_is_reusable_across_frames() {
        let mut slot = FrameSlot::new();
        for _ in 0..3 {
            assert!(slot.schedule());
            assert!(!slot.schedule());
            assert!(slot.take());
        }
    }
}
