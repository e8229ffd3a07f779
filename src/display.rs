//! Frame rendering for the SSD1306 panel: border plus cursor square,
//! flushed once per iteration.

use crate::state::BorderStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

pub const WIDTH: i32 = 128;
pub const HEIGHT: i32 = 64;

/// Edge length of the filled cursor square.
pub const CURSOR_SIZE: i32 = 8;

type PanelDisplay = Ssd1306<
    I2CInterface<arduino_hal::I2c>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct Panel {
    display: PanelDisplay,
}

impl Panel {
    pub fn new(i2c: arduino_hal::I2c) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().ok();
        Self { display }
    }

    /// Draw one frame: background, border per the current style, cursor
    /// square at the mapped position, then flush to the panel.
    pub fn draw_frame(&mut self, border: BorderStyle, x: i32, y: i32) {
        self.display.clear_buffer();
        self.draw_border(border);
        Rectangle::new(
            Point::new(x, y),
            Size::new(CURSOR_SIZE as u32, CURSOR_SIZE as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut self.display)
        .ok();
        self.display.flush().ok();
    }

    fn draw_border(&mut self, border: BorderStyle) {
        match border {
            BorderStyle::None => {}
            BorderStyle::Simple => {
                self.stroke_rect(3, 3, 122, 60);
            }
            BorderStyle::Double => {
                self.stroke_rect(3, 3, 122, 60);
                self.stroke_rect(5, 5, 118, 54);
            }
        }
    }

    fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.display)
            .ok();
    }
}
