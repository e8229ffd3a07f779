//! Joystick-driven panel firmware.
//!
//! The two analog axes set the brightness of the red and blue LEDs and
//! steer a cursor square on the OLED. Button A gates the LED outputs,
//! Button B toggles the status LED and cycles the display border; both are
//! serviced by falling-edge interrupts with a 300 ms debounce window.

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

mod buttons;
mod clock;
mod display;
mod joystick;
mod mapping;
mod state;

use panic_halt as _;

use arduino_hal::simple_pwm::{IntoPwmPin, Prescaler, Timer1Pwm};

use crate::display::{Panel, CURSOR_SIZE, HEIGHT, WIDTH};
use crate::joystick::Joystick;
use crate::mapping::centered_origin;

/// Delay inserted after each completed iteration. This is a fixed-delay
/// cadence, not a fixed rate: render and transfer time add to the period,
/// so jitter accumulates under variable frame cost.
const POLL_INTERVAL_MS: u16 = 100;

/// Divisor for the percentage figures in the diagnostic line.
const PERCENT_SCALE: u32 = 4094;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    clock::init(dp.TC0);

    let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
    let vrx = pins.a0.into_analog_input(&mut adc);
    let vry = pins.a1.into_analog_input(&mut adc);
    let mut joystick = Joystick::new(adc, vrx, vry);

    let timer1 = Timer1Pwm::new(dp.TC1, Prescaler::Prescale64);
    let mut red_led = pins.d9.into_output().into_pwm(&timer1);
    let mut blue_led = pins.d10.into_output().into_pwm(&timer1);
    red_led.enable();
    blue_led.enable();
    let mut green_led = pins.d8.into_output();

    // Button lines idle high; INT0/INT1 fire on the falling edge.
    let _button_a = pins.d2.into_pull_up_input();
    let _button_b = pins.d3.into_pull_up_input();
    buttons::init(dp.EXINT);

    let i2c = arduino_hal::i2c::I2c::new(
        dp.TWI,
        pins.a4.into_pull_up_input(),
        pins.a5.into_pull_up_input(),
        400_000,
    );
    let mut panel = Panel::new(i2c);

    unsafe { avr_device::interrupt::enable() };

    ufmt::uwriteln!(&mut serial, "joystick-panel ready").ok();

    let origin_x = centered_origin(WIDTH, CURSOR_SIZE);
    let origin_y = centered_origin(HEIGHT, CURSOR_SIZE);

    loop {
        let sample = joystick.read();
        let outputs = mapping::derive(sample, origin_x, origin_y);

        // One flag read per iteration; a flip from the interrupt side lands
        // on the next pass, never mid-frame.
        let controls = buttons::snapshot();

        if controls.actuator_active {
            red_led.set_duty((outputs.intensity_x >> 4) as u8);
            blue_led.set_duty((outputs.intensity_y >> 4) as u8);
        } else {
            red_led.set_duty(0);
            blue_led.set_duty(0);
        }

        if controls.visual_toggle {
            green_led.set_high();
        } else {
            green_led.set_low();
        }

        panel.draw_frame(controls.border, outputs.screen_x, outputs.screen_y);

        ufmt::uwriteln!(
            &mut serial,
            "(x, y) = ({}%, {}%)  Brilho(led azul, led vermelho) = ({}%, {}%)",
            sample.x as u32 * 100 / PERCENT_SCALE,
            sample.y as u32 * 100 / PERCENT_SCALE,
            outputs.intensity_y as u32 * 100 / PERCENT_SCALE,
            outputs.intensity_x as u32 * 100 / PERCENT_SCALE
        )
        .ok();

        arduino_hal::delay_ms(POLL_INTERVAL_MS);
    }
}
