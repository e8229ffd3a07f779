//! Pure mapping from joystick readings to actuator intensities and screen
//! coordinates.

/// Full-scale analog reading (12-bit domain).
pub const MAX_READING: u16 = 4095;

/// Rest position of either axis.
pub const CENTER: u16 = 2048;

/// Largest intensity the actuator output accepts.
pub const MAX_INTENSITY: u16 = 4095;

/// One pair of raw axis readings, produced fresh every loop iteration.
#[derive(Clone, Copy)]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}

/// Everything the control loop derives from one sample.
pub struct DerivedOutputs {
    pub intensity_x: u16,
    pub intensity_y: u16,
    pub screen_x: i32,
    pub screen_y: i32,
}

/// Brightness from the deviation off center: zero at rest, clamped full
/// scale at either extreme. Readings equally far above or below center give
/// the same intensity.
pub fn intensity_from_reading(reading: u16) -> u16 {
    let offset = (reading as i32 - CENTER as i32).unsigned_abs();
    (offset * 2).min(MAX_INTENSITY as u32) as u16
}

/// Linear, inverted position map: a reading above center moves the cursor
/// toward lower coordinates, a reading at center lands on `origin`.
pub fn position_from_reading(reading: u16, origin: i32) -> i32 {
    origin + (CENTER as i32 - reading as i32) * origin / CENTER as i32
}

/// Default (centered) coordinate for a cursor of `size` pixels on an axis
/// of `extent` pixels.
pub const fn centered_origin(extent: i32, size: i32) -> i32 {
    (extent - size) / 2
}

pub fn derive(sample: JoystickSample, origin_x: i32, origin_y: i32) -> DerivedOutputs {
    DerivedOutputs {
        intensity_x: intensity_from_reading(sample.x),
        intensity_y: intensity_from_reading(sample.y),
        screen_x: position_from_reading(sample.x, origin_x),
        screen_y: position_from_reading(sample.y, origin_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_zero_at_center() {
        assert_eq!(intensity_from_reading(CENTER), 0);
    }

    #[test]
    fn intensity_is_symmetric_around_center() {
        for delta in [1u16, 17, 256, 1000, 2047] {
            assert_eq!(
                intensity_from_reading(CENTER - delta),
                intensity_from_reading(CENTER + delta)
            );
        }
    }

    #[test]
    fn intensity_clamps_at_the_extreme() {
        // |0 - 2048| * 2 == 4096, one past the actuator maximum.
        assert_eq!(intensity_from_reading(0), MAX_INTENSITY);
        assert_eq!(intensity_from_reading(MAX_READING), 4094);
    }

    #[test]
    fn center_reading_lands_on_the_origin() {
        assert_eq!(position_from_reading(CENTER, 60), 60);
        assert_eq!(position_from_reading(CENTER, 28), 28);
    }

    #[test]
    fn extreme_readings_reach_the_axis_edges() {
        // Reading 0 (stick fully low) pushes toward the high edge.
        assert_eq!(position_from_reading(0, 60), 120);
        // Reading 4095 (stick fully high) pushes toward the low edge.
        assert_eq!(position_from_reading(MAX_READING, 60), 1);
    }

    #[test]
    fn centered_origin_matches_the_frame_geometry() {
        assert_eq!(centered_origin(128, 8), 60);
        assert_eq!(centered_origin(64, 8), 28);
    }

    #[test]
    fn derive_combines_both_axes() {
        let outputs = derive(JoystickSample { x: CENTER, y: 0 }, 60, 28);
        assert_eq!(outputs.intensity_x, 0);
        assert_eq!(outputs.intensity_y, MAX_INTENSITY);
        assert_eq!(outputs.screen_x, 60);
        assert_eq!(outputs.screen_y, 56);
    }
}
