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

//! Display surface adapters
//!
//! The decoders produce [`Raster`]s; putting one on screen (or on
//! disk) is a plain blit. These adapters are deliberately thin so the
//! core stays a pure data transform and any panel framework can
//! consume it.

use std::io::{self, Write};

use crate::core::raster::Raster;

/// Blit a raster into an RGBA8 byte buffer with integer scaling
///
/// Pixel order is R, G, B, A per pixel, row-major: the layout of an
/// HTML canvas or most texture upload paths. Transparent pixels keep
/// alpha 0.
pub fn blit_rgba(raster: &Raster, scale: u32) -> Vec<u8> {
    let scale = scale.max(1);
    let out_width = raster.width() * scale;
    let out_height = raster.height() * scale;
    let mut out = vec![0u8; (out_width * out_height * 4) as usize];

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let argb = raster.pixel(x, y);
            let rgba = [
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ];
            for yy in 0..scale {
                for xx in 0..scale {
                    let offset = (((y * scale + yy) * out_width + x * scale + xx) * 4) as usize;
                    out[offset..offset + 4].copy_from_slice(&rgba);
                }
            }
        }
    }

    out
}

/// Write a raster as a binary PPM (P6) image
///
/// Transparent pixels are composited onto black; PPM has no alpha
/// channel.
pub fn write_ppm<W: Write>(w: &mut W, raster: &Raster) -> io::Result<()> {
    write!(w, "P6\n{} {}\n255\n", raster.width(), raster.height())?;
    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let argb = raster.pixel(x, y);
            let rgb = if argb >> 24 == 0 { 0 } else { argb };
            w.write_all(&[(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])?;
        }
    }
    Ok(())
}
