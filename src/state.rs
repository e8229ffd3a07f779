//! Shared control state: debounce bookkeeping for the two buttons and the
//! flags the interrupt side publishes for the control loop.
//!
//! Everything here is plain data so the debounce fold and the border cycle
//! can be exercised without hardware.

/// Minimum spacing between accepted triggers on one button, in milliseconds.
/// Edges arriving inside the window are treated as contact bounce.
pub const DEBOUNCE_WINDOW_MS: u32 = 300;

/// Per-button debounce bookkeeping plus the toggle it drives.
///
/// Lives for the whole process; created with a zero timestamp and the toggle
/// cleared.
#[derive(Clone, Copy)]
pub struct ButtonChannel {
    last_trigger_ms: u32,
    toggle_state: bool,
}

impl ButtonChannel {
    pub const fn new() -> Self {
        Self {
            last_trigger_ms: 0,
            toggle_state: false,
        }
    }

    /// Feed one raw edge event. Returns the new toggle value when the edge
    /// is accepted, `None` when it falls inside the debounce window.
    ///
    /// The window is measured from the last *accepted* trigger, so
    /// suppression is a strict sequential fold: a burst of bounces never
    /// slides the window forward.
    pub fn accept(&mut self, now_ms: u32) -> Option<bool> {
        if now_ms.wrapping_sub(self.last_trigger_ms) <= DEBOUNCE_WINDOW_MS {
            return None;
        }
        self.last_trigger_ms = now_ms;
        self.toggle_state = !self.toggle_state;
        Some(self.toggle_state)
    }
}

/// Border rendering for the panel, cycled by accepted Button B presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BorderStyle {
    None,
    Simple,
    Double,
}

impl BorderStyle {
    /// Next style in the fixed cyclic order. Every accepted press advances
    /// exactly one step; the direction never depends on the toggle value.
    pub fn next(self) -> Self {
        match self {
            BorderStyle::None => BorderStyle::Simple,
            BorderStyle::Simple => BorderStyle::Double,
            BorderStyle::Double => BorderStyle::None,
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            BorderStyle::None => 0,
            BorderStyle::Simple => 1,
            BorderStyle::Double => 2,
        }
    }

    pub fn from_index(index: u8) -> Self {
        match index % 3 {
            0 => BorderStyle::None,
            1 => BorderStyle::Simple,
            _ => BorderStyle::Double,
        }
    }
}

/// View of the interrupt-owned flags taken once per control-loop iteration.
/// A flip from the interrupt side lands on the next pass, never mid-frame.
#[derive(Clone, Copy)]
pub struct ControlSnapshot {
    pub actuator_active: bool,
    pub visual_toggle: bool,
    pub border: BorderStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_outside_window_flips_toggle() {
        let mut channel = ButtonChannel::new();
        assert_eq!(channel.accept(301), Some(true));
    }

    #[test]
    fn trigger_at_exact_window_edge_is_suppressed() {
        let mut channel = ButtonChannel::new();
        assert_eq!(channel.accept(400), Some(true));
        // Exactly DEBOUNCE_WINDOW_MS later: still inside the window.
        assert_eq!(channel.accept(700), None);
        assert_eq!(channel.accept(701), Some(false));
    }

    #[test]
    fn suppression_folds_from_last_accepted_trigger() {
        let mut channel = ButtonChannel::new();
        let accepted = [400u32, 500, 650, 701, 720, 1010]
            .iter()
            .filter(|&&t| channel.accept(t).is_some())
            .count();
        // 400 accepted; 500 and 650 bounce; 701 is 301 ms after 400 and is
        // accepted; 720 bounces; 1010 is 309 ms after 701 and is accepted.
        assert_eq!(accepted, 3);
    }

    #[test]
    fn five_spaced_triggers_toggle_five_times_then_bounce_is_ignored() {
        let mut channel = ButtonChannel::new();
        let mut flips = 0;
        let mut t = 0;
        let mut last_toggle = false;
        for _ in 0..5 {
            t += 301;
            if let Some(toggle) = channel.accept(t) {
                flips += 1;
                last_toggle = toggle;
            }
        }
        assert_eq!(flips, 5);
        assert!(last_toggle);
        // A sixth edge 50 ms later is a no-op.
        assert_eq!(channel.accept(t + 50), None);
    }

    #[test]
    fn border_cycles_with_period_three() {
        let mut style = BorderStyle::None;
        let order = [
            BorderStyle::Simple,
            BorderStyle::Double,
            BorderStyle::None,
            BorderStyle::Simple,
        ];
        for expected in order {
            style = style.next();
            assert_eq!(style, expected);
        }
        // Four accepted presses from None land on Simple (4 mod 3 == 1).
    }

    #[test]
    fn border_index_round_trips() {
        for style in [BorderStyle::None, BorderStyle::Simple, BorderStyle::Double] {
            assert_eq!(BorderStyle::from_index(style.index()), style);
        }
    }
}
