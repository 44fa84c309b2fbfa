//! Sixteen-stop colour palettes
//!
//! Stops are spaced every 16 index steps. Index `n * 16` lands exactly on
//! stop `n`; anything in between is a linear blend of the two neighbouring
//! stops. The palette is cyclic: indices above the last stop blend back
//! towards the first one.

use super::{Rgb, rgb_from_u32};
use crate::math8::scale8;

/// Palette of 16 evenly spaced colour stops
pub type Palette16 = [Rgb; 16];

/// Full hue wheel, red through green and blue back towards red
pub const RAINBOW_COLORS: Palette16 = palette_from_u32([
    0xFF_00_00, 0xD5_2A_00, 0xAB_55_00, 0xAB_7F_00, //
    0xAB_AB_00, 0x56_D5_00, 0x00_FF_00, 0x00_D5_2A, //
    0x00_AB_55, 0x00_56_AA, 0x00_00_FF, 0x2A_00_D5, //
    0x55_00_AB, 0x7F_00_81, 0xAB_00_55, 0xD5_00_2B, //
]);

/// Build a palette from `0xRRGGBB` stops
pub const fn palette_from_u32(stops: [u32; 16]) -> Palette16 {
    let mut palette = [Rgb { r: 0, g: 0, b: 0 }; 16];
    let mut i = 0;
    while i < 16 {
        palette[i] = rgb_from_u32(stops[i]);
        i += 1;
    }
    palette
}

/// Sample `palette` at `index` with linear blending, full brightness
pub fn color_from_palette(palette: &Palette16, index: u8) -> Rgb {
    let stop = usize::from(index >> 4);
    let offset = index & 0x0F;
    let current = palette[stop];

    if offset == 0 {
        return current;
    }

    let next = palette[(stop + 1) % palette.len()];
    let amount_of_next = offset << 4;
    let amount_of_current = 255 - amount_of_next;

    // Both weights sum to 255, so the channels cannot overflow.
    let mix = |a: u8, b: u8| scale8(a, amount_of_current) + scale8(b, amount_of_next);

    Rgb {
        r: mix(current.r, next.r),
        g: mix(current.g, next.g),
        b: mix(current.b, next.b),
    }
}
