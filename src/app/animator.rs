/// Smooth-scroll animation owned by the viewport layer. Eases toward the
/// target by a fraction of the remaining distance per tick, never less than
/// one row, so long jumps start fast and land softly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScrollAnimator {
    target: Option<usize>,
    ease_divisor: usize,
}

impl ScrollAnimator {
    pub(crate) fn new(ease_divisor: usize) -> Self {
        Self {
            target: None,
            ease_divisor: ease_divisor.max(1),
        }
    }

    pub(crate) fn start(&mut self, target: usize) {
        self.target = Some(target);
    }

    pub(crate) fn cancel(&mut self) {
        self.target = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Next offset toward the target, or None when idle. Clears itself on
    /// arrival.
    pub(crate) fn advance(&mut self, current: usize) -> Option<usize> {
        let target = self.target?;
        if current == target {
            self.target = None;
            return None;
        }

        let step = (current.abs_diff(target) / self.ease_divisor).max(1);
        let next = if target > current {
            current.saturating_add(step).min(target)
        } else {
            current.saturating_sub(step).max(target)
        };
        if next == target {
            self.target = None;
        }
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollAnimator;

    #[test]
    fn advance_converges_on_the_target_and_goes_idle() {
        let mut animator = ScrollAnimator::new(4);
        animator.start(100);

        let mut offset = 0usize;
        let mut ticks = 0;
        while let Some(next) = animator.advance(offset) {
            assert!(next > offset, "downward animation must be monotonic");
            offset = next;
            ticks += 1;
            assert!(ticks < 200, "animation must terminate");
        }

        assert_eq!(offset, 100);
        assert!(!animator.is_active());
    }

    #[test]
    fn advance_moves_upward_when_target_is_above() {
        let mut animator = ScrollAnimator::new(4);
        animator.start(10);

        let next = animator.advance(90).expect("animation should step");
        assert!(next < 90);
        assert!(next >= 10);
    }

    #[test]
    fn short_distances_still_move_one_row_per_tick() {
        let mut animator = ScrollAnimator::new(8);
        animator.start(3);
        assert_eq!(animator.advance(0), Some(1));
        assert_eq!(animator.advance(1), Some(2));
        assert_eq!(animator.advance(2), Some(3));
        assert_eq!(animator.advance(3), None);
    }

    #[test]
    fn cancel_stops_the_animation_immediately() {
        let mut animator = ScrollAnimator::new(4);
        animator.start(50);
        animator.cancel();
        assert!(!animator.is_active());
        assert_eq!(animator.advance(0), None);
    }
}
