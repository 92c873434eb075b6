pub const SCROLL_DIRECTION_DEADZONE: f64 = 5.0;
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
pub const NAV_HIDE_OFFSET: f64 = 300.0;
pub const COUNT_UP_DURATION_MS: f64 = 2_000.0;
pub const CARET_BLINK_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollSnapshot {
    pub offset: f64,
    pub direction: ScrollDirection,
}

impl Default for ScrollSnapshot {
    fn default() -> Self {
        Self {
            offset: 0.0,
            direction: ScrollDirection::Down,
        }
    }
}

impl ScrollSnapshot {
    pub fn observe(self, offset: f64) -> Self {
        let offset = offset.max(0.0);
        let delta = offset - self.offset;

        let direction = if delta > SCROLL_DIRECTION_DEADZONE {
            ScrollDirection::Down
        } else if delta < -SCROLL_DIRECTION_DEADZONE {
            ScrollDirection::Up
        } else {
            self.direction
        };

        Self { offset, direction }
    }

    pub fn is_scrolled(self) -> bool {
        self.offset > NAV_SCROLLED_OFFSET
    }

    pub fn hides_navigation(self) -> bool {
        self.direction == ScrollDirection::Down && self.offset > NAV_HIDE_OFFSET
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VisibilityState {
    pub is_intersecting: bool,
    pub has_ever_intersected: bool,
}

impl VisibilityState {
    pub fn observe(self, is_intersecting: bool) -> Self {
        Self {
            is_intersecting,
            has_ever_intersected: self.has_ever_intersected || is_intersecting,
        }
    }

    pub fn revealed(self) -> bool {
        self.has_ever_intersected
    }
}

pub fn carousel_previous(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    (index + count - 1) % count
}

pub fn carousel_next(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    (index + 1) % count
}

/// Clicking the open row collapses it; clicking any other row moves the
/// single expansion there.
pub fn toggle_expansion(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn count_up_value(end: u64, duration_ms: f64, elapsed_ms: f64) -> u64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return end;
    }

    let progress = (elapsed_ms / duration_ms).max(0.0);
    (end as f64 * progress).floor() as u64
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TypewriterTiming {
    pub type_ms: f64,
    pub delete_ms: f64,
    pub hold_ms: f64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 120.0,
            delete_ms: 60.0,
            hold_ms: 1_600.0,
        }
    }
}

impl TypewriterTiming {
    fn sanitized(self) -> Self {
        Self {
            type_ms: self.type_ms.max(1.0),
            delete_ms: self.delete_ms.max(1.0),
            hold_ms: self.hold_ms.max(1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    roles: &'static [&'static str],
    timing: TypewriterTiming,
    role_index: usize,
    substring_len: usize,
    is_deleting: bool,
    next_due_ms: f64,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str], timing: TypewriterTiming, now_ms: f64) -> Self {
        let roles = if roles.is_empty() { &[""] } else { roles };
        let timing = timing.sanitized();

        Self {
            roles,
            timing,
            role_index: 0,
            substring_len: 0,
            is_deleting: false,
            next_due_ms: now_ms + timing.type_ms,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn substring_len(&self) -> usize {
        self.substring_len
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn text(&self) -> String {
        self.role().chars().take(self.substring_len).collect()
    }

    pub fn step_until(&mut self, now_ms: f64) -> bool {
        let mut changed = false;

        while now_ms >= self.next_due_ms {
            self.advance();
            changed = true;
        }

        changed
    }

    fn role(&self) -> &'static str {
        self.roles[self.role_index]
    }

    fn role_char_len(&self) -> usize {
        self.role().chars().count()
    }

    fn advance(&mut self) {
        if self.is_deleting {
            self.substring_len = self.substring_len.saturating_sub(1);

            if self.substring_len == 0 {
                self.is_deleting = false;
                self.role_index = (self.role_index + 1) % self.roles.len();
                self.next_due_ms += self.timing.type_ms;
            } else {
                self.next_due_ms += self.timing.delete_ms;
            }
        } else if self.substring_len < self.role_char_len() {
            self.substring_len += 1;

            if self.substring_len == self.role_char_len() {
                self.next_due_ms += self.timing.hold_ms;
            } else {
                self.next_due_ms += self.timing.type_ms;
            }
        } else {
            self.is_deleting = true;
            self.next_due_ms += self.timing.delete_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_deltas_leave_direction_unchanged() {
        let snapshot = ScrollSnapshot {
            offset: 100.0,
            direction: ScrollDirection::Up,
        };

        for delta in [-5.0, -2.5, 0.0, 2.5, 5.0] {
            let next = snapshot.observe(100.0 + delta);
            assert_eq!(next.direction, ScrollDirection::Up, "delta {delta}");
        }
    }

    #[test]
    fn deltas_past_the_deadzone_flip_direction() {
        let snapshot = ScrollSnapshot::default();

        let down = snapshot.observe(6.0);
        assert_eq!(down.direction, ScrollDirection::Down);

        let up = down.observe(0.0);
        assert_eq!(up.direction, ScrollDirection::Up);
    }

    #[test]
    fn negative_platform_offsets_are_clamped() {
        let snapshot = ScrollSnapshot::default().observe(-40.0);
        assert_eq!(snapshot.offset, 0.0);
    }

    #[test]
    fn navigation_scenario_matches_scroll_history() {
        let mut snapshot = ScrollSnapshot::default();
        assert!(!snapshot.is_scrolled());
        assert!(!snapshot.hides_navigation());

        snapshot = snapshot.observe(60.0);
        assert!(snapshot.is_scrolled());
        assert!(!snapshot.hides_navigation());

        snapshot = snapshot.observe(320.0);
        assert!(snapshot.hides_navigation());

        // Scrolling back up reveals the bar immediately, even while offset
        // is still past the hide threshold.
        snapshot = snapshot.observe(310.0);
        assert!(!snapshot.hides_navigation());
        assert!(snapshot.is_scrolled());
    }

    #[test]
    fn carousel_steps_wrap_modulo_the_item_count() {
        assert_eq!(carousel_next(0, 3), 1);
        assert_eq!(carousel_next(2, 3), 0);
        assert_eq!(carousel_previous(0, 3), 2);
        assert_eq!(carousel_previous(2, 3), 1);

        assert_eq!(carousel_next(0, 0), 0);
        assert_eq!(carousel_previous(0, 0), 0);
    }

    #[test]
    fn expansion_toggle_keeps_at_most_one_row_open() {
        assert_eq!(toggle_expansion(None, 1), Some(1));
        assert_eq!(toggle_expansion(Some(1), 1), None);
        assert_eq!(toggle_expansion(Some(1), 2), Some(2));
        assert_eq!(toggle_expansion(Some(2), 0), Some(0));
    }

    #[test]
    fn count_up_sequence_is_monotone_and_completes() {
        let end = 100;
        let duration = 2_000.0;

        assert_eq!(count_up_value(end, duration, 0.0), 0);

        let mut last = 0;
        for step in 0..=125 {
            let value = count_up_value(end, duration, f64::from(step) * 16.0);
            assert!(value >= last);
            assert!(value <= end);
            last = value;
        }

        assert_eq!(count_up_value(end, duration, 2_000.0), end);
        assert_eq!(count_up_value(end, duration, 10_000.0), end);
    }

    #[test]
    fn count_up_with_zero_duration_is_already_complete() {
        assert_eq!(count_up_value(42, 0.0, 0.0), 42);
    }

    const ROLES: &[&str] = &["Backend Engineer", "Systems Architect"];

    #[test]
    fn typewriter_substring_never_exceeds_role_length() {
        let mut machine = Typewriter::new(ROLES, TypewriterTiming::default(), 0.0);

        let mut now = 0.0;
        for _ in 0..2_000 {
            now += 30.0;
            machine.step_until(now);
            let role_len = ROLES[machine.role_index()].chars().count();
            assert!(machine.substring_len() <= role_len);
        }
    }

    #[test]
    fn typewriter_advances_one_role_per_full_cycle() {
        let timing = TypewriterTiming {
            type_ms: 10.0,
            delete_ms: 5.0,
            hold_ms: 50.0,
        };
        let mut machine = Typewriter::new(ROLES, timing, 0.0);
        assert_eq!(machine.role_index(), 0);

        let mut now = 0.0;
        while machine.role_index() == 0 {
            now += 5.0;
            machine.step_until(now);
            assert!(now < 60_000.0, "cycle did not complete");
        }

        assert_eq!(machine.role_index(), 1);
        assert!(!machine.is_deleting());
        assert_eq!(machine.substring_len(), 0);

        // Wrap back to the first role after the last one finishes.
        while machine.role_index() == 1 {
            now += 5.0;
            machine.step_until(now);
            assert!(now < 120_000.0, "cycle did not wrap");
        }
        assert_eq!(machine.role_index(), 0);
    }

    #[test]
    fn typewriter_types_holds_then_deletes() {
        let timing = TypewriterTiming {
            type_ms: 10.0,
            delete_ms: 5.0,
            hold_ms: 100.0,
        };
        let mut machine = Typewriter::new(&["ab"], timing, 0.0);

        machine.step_until(10.0);
        assert_eq!(machine.text(), "a");

        machine.step_until(20.0);
        assert_eq!(machine.text(), "ab");
        assert!(!machine.is_deleting());

        // Held at full length until the hold window passes.
        machine.step_until(100.0);
        assert_eq!(machine.text(), "ab");

        machine.step_until(125.0);
        assert!(machine.substring_len() < 2);
    }

    #[test]
    fn typewriter_rebuilt_with_new_timing_uses_the_new_cadence() {
        let slow = TypewriterTiming {
            type_ms: 100.0,
            delete_ms: 50.0,
            hold_ms: 500.0,
        };
        let fast = TypewriterTiming {
            type_ms: 10.0,
            ..slow
        };

        let mut machine = Typewriter::new(&["ab"], slow, 0.0);
        machine.step_until(20.0);
        assert_eq!(machine.text(), "");

        let mut machine = Typewriter::new(&["ab"], fast, 0.0);
        machine.step_until(20.0);
        assert_eq!(machine.text(), "ab");
    }

    #[test]
    fn typewriter_tolerates_empty_role_lists() {
        let mut machine = Typewriter::new(&[], TypewriterTiming::default(), 0.0);

        for step in 1..50 {
            machine.step_until(f64::from(step) * 100.0);
            assert_eq!(machine.text(), "");
        }
    }

    #[test]
    fn visibility_reveal_is_monotonic() {
        let mut state = VisibilityState::default();
        assert!(!state.revealed());

        state = state.observe(false);
        assert!(!state.revealed());

        state = state.observe(true);
        assert!(state.revealed());

        state = state.observe(false);
        assert!(!state.is_intersecting);
        assert!(state.has_ever_intersected);
    }
}
