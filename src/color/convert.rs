//! Integer HSV to RGB conversion.

use super::{Hsv, Rgb};

/// Width of one hue section (the byte hue wheel splits into 64-step thirds).
const HSV_SECTION_3: u8 = 0x40;

/// Convert an HSV color to raw RGB using integer math.
///
/// The value channel sets a brightness floor of `v * (255 - s) / 256` on
/// every channel; the remaining amplitude ramps up and down across each
/// 64-step hue section. Hues of 192 and above fall through to the final
/// section.
pub fn hsv2rgb_raw(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;

    let invsat = 255 - s;
    let brightness_floor = ((v as u16 * invsat as u16) / 256) as u8;
    let color_amplitude = v - brightness_floor;

    let section = h / HSV_SECTION_3;
    let offset = h % HSV_SECTION_3;

    let rampup = offset;
    let rampdown = (HSV_SECTION_3 - 1) - offset;

    let rampup_adj =
        ((rampup as u16 * color_amplitude as u16) / 64) as u8 + brightness_floor;
    let rampdown_adj =
        ((rampdown as u16 * color_amplitude as u16) / 64) as u8 + brightness_floor;

    match section {
        0 => Rgb::new(rampdown_adj, rampup_adj, brightness_floor),
        1 => Rgb::new(brightness_floor, rampdown_adj, rampup_adj),
        _ => Rgb::new(rampup_adj, brightness_floor, rampdown_adj),
    }
}
