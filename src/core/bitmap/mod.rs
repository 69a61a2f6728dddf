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

//! Bitmap geometry resolution
//!
//! A bitmap resource is described by its base address, pixel
//! dimensions, plane count and storage flags. Resolution turns that
//! description into the per-plane base addresses and per-scanline byte
//! modulos the pixel decoder needs. Pure address arithmetic, no
//! memory access.
//!
//! # Storage layouts
//!
//! **Interleaved**: all planes of one scanline are stored adjacently,
//! row by row. A masked interleaved bitmap stores each plane's mask
//! row directly after the plane's bitmap row, doubling the row group.
//!
//! **Non-interleaved**: each plane is one contiguous `(width/8) *
//! height` block; the mask (when present) is a second block of the
//! same size after each plane.

#[cfg(test)]
mod tests;

use bitflags::bitflags;

use crate::core::error::GeometryError;

bitflags! {
    /// Storage layout flags of a bitmap resource
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BitmapFlags: u32 {
        /// Planes are stored row-interleaved
        const INTERLEAVED = 1 << 0;
        /// A transparency mask accompanies the bitmap
        const MASKED = 1 << 1;
    }
}

/// Description of a planar bitmap resource in chip RAM
///
/// Owned by the resource catalog; read-only to the decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapDescriptor {
    /// Base address of the first plane's data
    pub address: u32,

    /// Width in pixels (must be a multiple of 8)
    pub width: u32,

    /// Height in scanlines
    pub height: u32,

    /// Number of bitplanes (1..=8)
    pub num_planes: u32,

    /// Storage layout
    pub flags: BitmapFlags,
}

/// Resolved framebuffer geometry: where each plane's data lives and
/// how to step from one scanline to the next
///
/// `modulos` holds the extra byte offset added after each row, one
/// slot for even-indexed planes and one for odd-indexed planes
/// (mirroring the two hardware modulo registers). Values are signed:
/// the hardware registers are signed 16-bit and programs do use
/// negative strides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// Width in pixels
    pub width: u32,

    /// Height in scanlines
    pub height: u32,

    /// Base address of each plane, plane 0 first
    pub planes: Vec<u32>,

    /// Per-scanline byte modulo for even/odd planes
    pub modulos: [i32; 2],
}

impl ScreenGeometry {
    /// Bytes of pixel data per plane per scanline
    pub fn row_bytes(&self) -> u32 {
        self.width / 8
    }

    /// Byte distance from one scanline of plane `p` to the next
    pub fn row_stride(&self, p: usize) -> i32 {
        self.row_bytes() as i32 + self.modulos[p & 1]
    }

    /// Address of scanline `y` of plane `p`
    ///
    /// Rows are addressable directly, without walking prior rows, so
    /// scanlines can be decoded independently.
    pub fn row_base(&self, p: usize, y: u32) -> u32 {
        self.planes[p].wrapping_add_signed(y as i32 * self.row_stride(p))
    }
}

/// A resolved bitmap: the primary geometry plus, for masked bitmaps,
/// the geometry of the companion mask planes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBitmap {
    pub screen: ScreenGeometry,
    pub mask: Option<ScreenGeometry>,
}

/// Compute plane addresses and scanline modulos for a bitmap resource
///
/// Pure arithmetic over the descriptor; no memory is read. Invalid
/// descriptors are rejected before any address is formed.
///
/// # Errors
///
/// [`GeometryError`] when the descriptor has no planes, more than 8
/// planes, empty dimensions, or a width that is not a multiple of 8.
///
/// # Examples
///
/// ```
/// use denise::core::bitmap::{resolve, BitmapDescriptor, BitmapFlags};
///
/// let desc = BitmapDescriptor {
///     address: 0x2_0000,
///     width: 320,
///     height: 2,
///     num_planes: 2,
///     flags: BitmapFlags::INTERLEAVED,
/// };
/// let bitmap = resolve(&desc).unwrap();
/// assert_eq!(bitmap.screen.planes, vec![0x2_0000, 0x2_0028]);
/// assert_eq!(bitmap.screen.modulos, [40, 40]);
/// assert!(bitmap.mask.is_none());
/// ```
pub fn resolve(desc: &BitmapDescriptor) -> Result<ResolvedBitmap, GeometryError> {
    if desc.num_planes == 0 {
        return Err(GeometryError::NoPlanes);
    }
    if desc.num_planes > 8 {
        return Err(GeometryError::TooManyPlanes(desc.num_planes));
    }
    if desc.width == 0 || desc.height == 0 {
        return Err(GeometryError::EmptyDimensions {
            width: desc.width,
            height: desc.height,
        });
    }
    if desc.width % 8 != 0 {
        return Err(GeometryError::UnalignedWidth(desc.width));
    }

    let row_bytes = desc.width / 8;
    let masked = desc.flags.contains(BitmapFlags::MASKED);

    let (planes, modulos, mask_planes) = if desc.flags.contains(BitmapFlags::INTERLEAVED) {
        // Bitmap and mask rows alternate when masked, doubling the
        // distance between a plane's consecutive rows
        let modulo_scale = if masked { 2 } else { 1 };
        let planes: Vec<u32> = (0..desc.num_planes)
            .map(|p| desc.address + p * row_bytes * modulo_scale)
            .collect();
        let modulo = (row_bytes * (desc.num_planes * modulo_scale - 1)) as i32;
        // Mask row immediately follows each plane's bitmap row
        let mask_planes: Option<Vec<u32>> =
            masked.then(|| planes.iter().map(|a| a + row_bytes).collect());
        (planes, [modulo, modulo], mask_planes)
    } else {
        let plane_bytes = row_bytes * desc.height;
        let planes: Vec<u32> = (0..desc.num_planes)
            .map(|p| desc.address + p * plane_bytes)
            .collect();
        // Mask block assumed to follow each plane block. This layout
        // has not been validated against hardware output; see the
        // regression test pinning it.
        let mask_planes: Option<Vec<u32>> =
            masked.then(|| planes.iter().map(|a| a + plane_bytes).collect());
        (planes, [0, 0], mask_planes)
    };

    log::trace!(
        "resolved {}x{}x{} bitmap at ${:06X}: planes {:?}, modulos {:?}",
        desc.width,
        desc.height,
        desc.num_planes,
        desc.address,
        planes,
        modulos
    );

    let screen = ScreenGeometry {
        width: desc.width,
        height: desc.height,
        planes,
        modulos,
    };
    let mask = mask_planes.map(|planes| ScreenGeometry {
        width: desc.width,
        height: desc.height,
        planes,
        modulos,
    });

    Ok(ResolvedBitmap { screen, mask })
}
