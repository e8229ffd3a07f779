//! Monotonic millisecond tick derived from TC0.
//!
//! TC0 runs in CTC mode with a 1 kHz compare rate (16 MHz / 64 / 250); the
//! compare interrupt bumps a 32-bit counter. The counter is wider than the
//! AVR atomic width, so both sides go through a critical section.

use avr_device::atmega328p::TC0;
use avr_device::interrupt::{CriticalSection, Mutex};
use core::cell::Cell;

/// Compare TOP for a 1 ms period at prescale 64.
const TICK_TOP: u8 = 249;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Put TC0 into CTC mode and enable its compare interrupt. Call once,
/// before `avr_device::interrupt::enable`.
pub fn init(tc0: TC0) {
    tc0.tccr0a.write(|w| w.wgm0().ctc());
    tc0.ocr0a.write(|w| unsafe { w.bits(TICK_TOP) });
    tc0.tccr0b.write(|w| w.cs0().prescale_64());
    tc0.timsk0.write(|w| w.ocie0a().set_bit());
}

/// Milliseconds since `init`, for main-loop context.
#[allow(dead_code)]
pub fn millis() -> u32 {
    avr_device::interrupt::free(|cs| now(cs))
}

/// Same reading for callers already inside a critical section.
pub fn now(cs: CriticalSection) -> u32 {
    MILLIS.borrow(cs).get()
}

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn TIMER0_COMPA() {
    avr_device::interrupt::free(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}
