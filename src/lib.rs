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

//! Amiga chipset graphics decoder core
//!
//! This library decodes the graphics state of a frozen Amiga debugger
//! frame snapshot into data a frontend can display:
//! - the Copper display list, with beam positions and a disassembler
//! - planar bitplane bitmaps, resolved into per-pixel rasters
//! - palettes, extracted from the Copper list, the custom register
//!   snapshot, or raw chip memory
//!
//! # Example
//!
//! ```
//! use denise::core::bitmap::{resolve, BitmapDescriptor, BitmapFlags};
//! use denise::core::mem::ChipMemory;
//! use denise::core::palette::Palette;
//! use denise::core::raster::decode_raster;
//!
//! let desc = BitmapDescriptor {
//!     address: 0x1_0000,
//!     width: 320,
//!     height: 200,
//!     num_planes: 2,
//!     flags: BitmapFlags::INTERLEAVED,
//! };
//! let resolved = resolve(&desc).unwrap();
//!
//! let mem = ChipMemory::new(vec![0; 0x4_0000]);
//! let palette = Palette::from_raw(&[0x0000, 0x0FFF, 0x0F00, 0x00F0]);
//! let raster = decode_raster(&mem, &resolved.screen, None, &palette);
//! assert_eq!(raster.width(), 320);
//! assert_eq!(raster.height(), 200);
//! ```

pub mod core;
pub mod frontend;
