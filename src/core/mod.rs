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

//! Core decoding components
//!
//! This module contains all chipset decoding components:
//! - Chip memory snapshot (byte/word reads over a frozen RAM image)
//! - Custom register snapshot and register name table
//! - DMA timeline events
//! - Copper display-list decoder and disassembler
//! - Palette extraction (Copper / registers / memory)
//! - Bitmap geometry resolution and planar raster decoding
//! - Resource catalog and session snapshot loading

pub mod bitmap;
pub mod copper;
pub mod dma;
pub mod error;
pub mod mem;
pub mod palette;
pub mod raster;
pub mod registers;
pub mod resource;
pub mod session;

// Re-export commonly used types
pub use bitmap::{resolve, BitmapDescriptor, BitmapFlags, ResolvedBitmap, ScreenGeometry};
pub use copper::{decode_copper, screen_from_copper, CopperEntry, CopperInsn, CopperList};
pub use dma::DmaEvent;
pub use error::{GeometryError, Result, ViewerError};
pub use mem::ChipMemory;
pub use palette::Palette;
pub use raster::{color_index_at, decode_raster, Raster};
pub use registers::CustomRegisters;
pub use resource::GfxResource;
pub use session::Session;
