//! Edge-interrupt service for the two push buttons.
//!
//! INT0 (Button A) and INT1 (Button B) fire on the falling edge of the
//! pulled-up button lines. The service routines run the debounce fold and
//! publish the results through word-size flags; the control loop picks a
//! change up at most one iteration late.

use crate::clock;
use crate::state::{BorderStyle, ButtonChannel, ControlSnapshot};
use avr_device::atmega328p::EXINT;
use avr_device::interrupt::Mutex;
use core::cell::Cell;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Actuator gate set by Button A; while false both PWM channels are driven
/// to zero regardless of the joystick.
static ACTUATOR_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Status LED toggle set by Button B.
static VISUAL_TOGGLE: AtomicBool = AtomicBool::new(false);

/// Current border style index, advanced on every accepted Button B press.
/// The panel boots with the simple border.
static BORDER_STYLE: AtomicU8 = AtomicU8::new(BorderStyle::Simple.index());

/// Debounce timestamps are 32-bit and exceed the AVR atomic width, so the
/// channels sit behind a critical-section mutex instead.
static BUTTON_A: Mutex<Cell<ButtonChannel>> = Mutex::new(Cell::new(ButtonChannel::new()));
static BUTTON_B: Mutex<Cell<ButtonChannel>> = Mutex::new(Cell::new(ButtonChannel::new()));

#[derive(Clone, Copy)]
enum ButtonId {
    A,
    B,
}

/// Enable falling-edge interrupts for both buttons. The button pins must
/// already be configured as pull-up inputs.
pub fn init(exint: EXINT) {
    // ISCx = 0b10 selects the falling edge.
    exint.eicra.write(|w| w.isc0().bits(0b10).isc1().bits(0b10));
    exint.eimsk.write(|w| w.int0().set_bit().int1().set_bit());
}

/// The flags as seen by one control-loop iteration.
pub fn snapshot() -> ControlSnapshot {
    ControlSnapshot {
        actuator_active: ACTUATOR_ACTIVE.load(Ordering::SeqCst),
        visual_toggle: VISUAL_TOGGLE.load(Ordering::SeqCst),
        border: BorderStyle::from_index(BORDER_STYLE.load(Ordering::SeqCst)),
    }
}

fn handle_trigger(id: ButtonId) {
    avr_device::interrupt::free(|cs| {
        let now = clock::now(cs);
        let cell = match id {
            ButtonId::A => BUTTON_A.borrow(cs),
            ButtonId::B => BUTTON_B.borrow(cs),
        };
        let mut channel = cell.get();
        let Some(toggle) = channel.accept(now) else {
            return;
        };
        cell.set(channel);
        match id {
            ButtonId::A => ACTUATOR_ACTIVE.store(toggle, Ordering::SeqCst),
            ButtonId::B => {
                VISUAL_TOGGLE.store(toggle, Ordering::SeqCst);
                // Every accepted press advances the border by one step; the
                // cycle direction never follows the toggle value.
                let next = BorderStyle::from_index(BORDER_STYLE.load(Ordering::SeqCst)).next();
                BORDER_STYLE.store(next.index(), Ordering::SeqCst);
            }
        }
    });
}

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn INT0() {
    handle_trigger(ButtonId::A);
}

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn INT1() {
    handle_trigger(ButtonId::B);
}
