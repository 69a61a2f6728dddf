// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Planar pixel decoding
//!
//! Converts resolved bitmap geometry plus a palette into a raster of
//! displayable pixels. Each pixel's color index is assembled bit by
//! bit from the planes: plane `p` contributes bit `p`, the
//! most-significant bit of each fetched word being the leftmost pixel
//! of its 16-pixel column, exactly the hardware's fetch order.
//!
//! With a mask, a mask value is composed from the mask planes the same
//! way and ANDed onto the color index; an index of 0 after masking is
//! fully transparent rather than a palette lookup. Without a mask,
//! index 0 is an ordinary opaque palette entry.
//!
//! Decoding is pure: the same `(geometry, mask, palette, memory)`
//! inputs always produce a bit-identical raster, and rows are decoded
//! independently from their directly-computed base addresses.

#[cfg(test)]
mod tests;

use crate::core::bitmap::ScreenGeometry;
use crate::core::mem::ChipMemory;
use crate::core::palette::Palette;

/// Fully transparent raster pixel
pub const TRANSPARENT: u32 = 0x0000_0000;

/// A decoded image in ARGB8888; opaque pixels carry alpha 0xFF
///
/// Ephemeral: recomputed whenever geometry, mask, palette or the
/// underlying snapshot changes, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Raster {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (`x`, `y`) in ARGB8888
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

fn opaque(rgb: u32) -> u32 {
    0xFF00_0000 | rgb
}

/// Compose the pixel indices of one 16-pixel column
///
/// Reads one word per plane at `row_base[p] + column * 2` and fans the
/// bits out into 16 indices, leftmost pixel first.
fn decode_word_column(mem: &ChipMemory, row_bases: &[u32], column: u32, out: &mut [u8; 16]) {
    out.fill(0);
    for (p, &base) in row_bases.iter().enumerate() {
        let word = mem.read_word(base.wrapping_add(column * 2));
        for (i, pixel) in out.iter_mut().enumerate() {
            if word & (1 << (15 - i)) != 0 {
                *pixel |= 1 << p;
            }
        }
    }
}

/// Decode a full raster from planar bitmap data
///
/// `mask` supplies the geometry of the companion mask planes for
/// masked bitmaps. Palette lookups past the palette's end resolve to
/// the background color rather than failing, so a short palette can
/// preview a deep bitmap.
///
/// The raster's dimensions come from `screen`; widths are processed in
/// whole 16-pixel words (a trailing partial word is not fetched).
pub fn decode_raster(
    mem: &ChipMemory,
    screen: &ScreenGeometry,
    mask: Option<&ScreenGeometry>,
    palette: &Palette,
) -> Raster {
    let width = screen.width;
    let height = screen.height;
    let words = width / 16;
    let mut pixels = vec![TRANSPARENT; (width * height) as usize];

    let mut indices = [0u8; 16];
    let mut mask_values = [0u8; 16];

    for y in 0..height {
        let row_bases: Vec<u32> = (0..screen.planes.len())
            .map(|p| screen.row_base(p, y))
            .collect();
        let mask_bases: Option<Vec<u32>> = mask.map(|m| {
            (0..m.planes.len()).map(|p| m.row_base(p, y)).collect()
        });

        let row = &mut pixels[(y * width) as usize..((y + 1) * width) as usize];
        for column in 0..words {
            decode_word_column(mem, &row_bases, column, &mut indices);
            let out = &mut row[(column * 16) as usize..(column * 16 + 16) as usize];
            match &mask_bases {
                Some(bases) => {
                    decode_word_column(mem, bases, column, &mut mask_values);
                    for i in 0..16 {
                        let index = indices[i] & mask_values[i];
                        out[i] = if index == 0 {
                            TRANSPARENT
                        } else {
                            opaque(palette.color(index as usize))
                        };
                    }
                }
                None => {
                    for i in 0..16 {
                        out[i] = opaque(palette.color(indices[i] as usize));
                    }
                }
            }
        }
    }

    log::trace!(
        "decoded {}x{} raster ({} planes{})",
        width,
        height,
        screen.planes.len(),
        if mask.is_some() { ", masked" } else { "" }
    );

    Raster {
        width,
        height,
        pixels,
    }
}

/// Raw color index of a single pixel
///
/// Byte-addressed probe used for hover inspection; reads only the
/// bytes covering (`x`, `y`) and applies neither palette nor mask.
/// Probing a mask geometry returns the mask value instead.
pub fn color_index_at(mem: &ChipMemory, screen: &ScreenGeometry, x: u32, y: u32) -> u8 {
    let mut index = 0u8;
    for p in 0..screen.planes.len() {
        let addr = screen.row_base(p, y).wrapping_add(x / 8);
        let byte = mem.read_byte(addr);
        if byte & (1 << (7 - (x & 7))) != 0 {
            index |= 1 << p;
        }
    }
    index
}
