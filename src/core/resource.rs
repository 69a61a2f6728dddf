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

//! Graphics resource catalog entries
//!
//! The debugged program registers its graphics assets (bitmaps and
//! palette tables) with the profiler; the session snapshot carries
//! them as a catalog. A resource is either a bitmap or a palette:
//! two explicit variants with only the fields that case needs,
//! matched exhaustively by consumers.

use serde::{Deserialize, Serialize};

use crate::core::bitmap::{BitmapDescriptor, BitmapFlags};

/// One entry of the session's graphics resource catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GfxResource {
    /// A planar bitmap in chip RAM
    Bitmap {
        /// Name the program registered the asset under
        name: String,
        /// Base address in chip RAM
        address: u32,
        /// Total size in bytes (0 when unknown)
        #[serde(default)]
        size: u32,
        /// Width in pixels
        width: u32,
        /// Height in scanlines
        height: u32,
        /// Number of bitplanes
        num_planes: u32,
        /// Planes stored row-interleaved
        #[serde(default)]
        interleaved: bool,
        /// A transparency mask follows the bitmap data
        #[serde(default)]
        masked: bool,
    },

    /// A palette table in chip RAM
    Palette {
        /// Name the program registered the asset under
        name: String,
        /// Address of the first 16-bit color word
        address: u32,
        /// Number of color entries
        num_entries: usize,
    },
}

impl GfxResource {
    /// The resource's registered name
    pub fn name(&self) -> &str {
        match self {
            GfxResource::Bitmap { name, .. } | GfxResource::Palette { name, .. } => name,
        }
    }

    /// Descriptor for geometry resolution, for bitmap resources
    pub fn descriptor(&self) -> Option<BitmapDescriptor> {
        match *self {
            GfxResource::Bitmap {
                address,
                width,
                height,
                num_planes,
                interleaved,
                masked,
                ..
            } => {
                let mut flags = BitmapFlags::empty();
                flags.set(BitmapFlags::INTERLEAVED, interleaved);
                flags.set(BitmapFlags::MASKED, masked);
                Some(BitmapDescriptor {
                    address,
                    width,
                    height,
                    num_planes,
                    flags,
                })
            }
            GfxResource::Palette { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_descriptor_flags() {
        let resource = GfxResource::Bitmap {
            name: "gfx.background".into(),
            address: 0x1_0000,
            size: 32_000,
            width: 320,
            height: 200,
            num_planes: 5,
            interleaved: true,
            masked: false,
        };
        let desc = resource.descriptor().unwrap();
        assert!(desc.flags.contains(BitmapFlags::INTERLEAVED));
        assert!(!desc.flags.contains(BitmapFlags::MASKED));
        assert_eq!(desc.num_planes, 5);
    }

    #[test]
    fn test_palette_has_no_descriptor() {
        let resource = GfxResource::Palette {
            name: "gfx.palette".into(),
            address: 0x2_0000,
            num_entries: 16,
        };
        assert!(resource.descriptor().is_none());
        assert_eq!(resource.name(), "gfx.palette");
    }

    #[test]
    fn test_serde_round_trip() {
        let resource = GfxResource::Bitmap {
            name: "bob".into(),
            address: 0x400,
            size: 0,
            width: 64,
            height: 32,
            num_planes: 3,
            interleaved: true,
            masked: true,
        };
        let json = serde_json::to_string(&resource).unwrap();
        let back: GfxResource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resource);
    }

    #[test]
    fn test_tagged_json_shape() {
        let json = r#"{
            "type": "palette",
            "name": "fade",
            "address": 1024,
            "num_entries": 32
        }"#;
        let resource: GfxResource = serde_json::from_str(json).unwrap();
        assert_eq!(
            resource,
            GfxResource::Palette {
                name: "fade".into(),
                address: 1024,
                num_entries: 32,
            }
        );
    }
}
