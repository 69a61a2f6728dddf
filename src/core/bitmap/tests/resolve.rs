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

//! Geometry resolution tests

use super::super::*;
use crate::core::error::GeometryError;

const A: u32 = 0x0004_0000;

fn desc(width: u32, height: u32, num_planes: u32, flags: BitmapFlags) -> BitmapDescriptor {
    BitmapDescriptor {
        address: A,
        width,
        height,
        num_planes,
        flags,
    }
}

#[test]
fn test_interleaved_unmasked() {
    let bitmap = resolve(&desc(320, 2, 2, BitmapFlags::INTERLEAVED)).unwrap();
    assert_eq!(bitmap.screen.planes, vec![A, A + 40]);
    assert_eq!(bitmap.screen.modulos, [40, 40]);
    assert!(bitmap.mask.is_none());
}

#[test]
fn test_non_interleaved_unmasked() {
    let bitmap = resolve(&desc(320, 2, 2, BitmapFlags::empty())).unwrap();
    assert_eq!(bitmap.screen.planes, vec![A, A + 80]);
    assert_eq!(bitmap.screen.modulos, [0, 0]);
    assert!(bitmap.mask.is_none());
}

#[test]
fn test_interleaved_masked() {
    let bitmap = resolve(&desc(
        320,
        2,
        2,
        BitmapFlags::INTERLEAVED | BitmapFlags::MASKED,
    ))
    .unwrap();
    // Bitmap and mask rows interleave: plane stride doubles
    assert_eq!(bitmap.screen.planes, vec![A, A + 80]);
    assert_eq!(bitmap.screen.modulos, [120, 120]);

    let mask = bitmap.mask.unwrap();
    assert_eq!(mask.planes, vec![A + 40, A + 120]);
    assert_eq!(mask.modulos, [120, 120]);
    assert_eq!(mask.width, 320);
    assert_eq!(mask.height, 2);
}

#[test]
fn test_non_interleaved_masked_pinned_layout() {
    // This layout (mask block after each plane block) has never been
    // validated against hardware output; the formula is pinned here so
    // a change is deliberate, not accidental.
    let bitmap = resolve(&desc(320, 2, 2, BitmapFlags::MASKED)).unwrap();
    assert_eq!(bitmap.screen.planes, vec![A, A + 80]);
    let mask = bitmap.mask.unwrap();
    assert_eq!(mask.planes, vec![A + 80, A + 160]);
    assert_eq!(mask.modulos, [0, 0]);
}

#[test]
fn test_single_plane() {
    let bitmap = resolve(&desc(16, 4, 1, BitmapFlags::INTERLEAVED)).unwrap();
    assert_eq!(bitmap.screen.planes, vec![A]);
    // One plane interleaved: no rows to skip
    assert_eq!(bitmap.screen.modulos, [0, 0]);
}

#[test]
fn test_rejects_zero_planes() {
    assert_eq!(
        resolve(&desc(320, 200, 0, BitmapFlags::empty())).unwrap_err(),
        GeometryError::NoPlanes
    );
}

#[test]
fn test_rejects_too_many_planes() {
    assert_eq!(
        resolve(&desc(320, 200, 9, BitmapFlags::empty())).unwrap_err(),
        GeometryError::TooManyPlanes(9)
    );
}

#[test]
fn test_rejects_empty_dimensions() {
    assert!(matches!(
        resolve(&desc(0, 200, 1, BitmapFlags::empty())),
        Err(GeometryError::EmptyDimensions { .. })
    ));
    assert!(matches!(
        resolve(&desc(320, 0, 1, BitmapFlags::empty())),
        Err(GeometryError::EmptyDimensions { .. })
    ));
}

#[test]
fn test_rejects_unaligned_width() {
    assert_eq!(
        resolve(&desc(12, 4, 1, BitmapFlags::empty())).unwrap_err(),
        GeometryError::UnalignedWidth(12)
    );
}

#[test]
fn test_row_base_steps_by_stride() {
    let bitmap = resolve(&desc(320, 4, 2, BitmapFlags::INTERLEAVED)).unwrap();
    let screen = &bitmap.screen;
    // Interleaved 2 planes: stride = 40 + 40
    assert_eq!(screen.row_base(0, 0), A);
    assert_eq!(screen.row_base(0, 1), A + 80);
    assert_eq!(screen.row_base(1, 2), A + 40 + 160);
}

#[test]
fn test_negative_modulo_row_base() {
    let screen = ScreenGeometry {
        width: 16,
        height: 4,
        planes: vec![0x100],
        modulos: [-2, 0],
    };
    // stride = 2 + (-2) = 0: every row starts at the same address
    assert_eq!(screen.row_base(0, 3), 0x100);
}
