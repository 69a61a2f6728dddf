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

//! Frame snapshot loading
//!
//! A captured frame is stored as a JSON manifest next to a raw chip
//! RAM dump. The manifest carries everything except the memory bytes:
//!
//! ```text
//! {
//!     "memory": "chipmem.bin",
//!     "memory_size": 524288,
//!     "custom_regs": [0, 0, ...],
//!     "dma_events": [ {"vpos": 44, "hpos": 8, "reg": 140, "address": 1024}, ... ],
//!     "resources": [ {"type": "bitmap", "name": "gfx.background", ...}, ... ]
//! }
//! ```
//!
//! `memory` is resolved relative to the manifest's directory.
//! `memory_size`, when present, guards against loading a dump from a
//! different machine configuration.
//!
//! The loaded [`Session`] is the composition root's handle: it owns
//! the immutable snapshot pieces and hands them to the pure decoding
//! functions. The decoders themselves never reach for any ambient
//! session state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::dma::DmaEvent;
use crate::core::error::{Result, ViewerError};
use crate::core::mem::ChipMemory;
use crate::core::registers::CustomRegisters;
use crate::core::resource::GfxResource;

/// On-disk manifest of a captured frame
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionManifest {
    /// Chip RAM dump file, relative to the manifest
    memory: String,

    /// Expected dump size in bytes
    #[serde(default)]
    memory_size: Option<usize>,

    /// Custom register bank at end of frame
    #[serde(default)]
    custom_regs: Vec<u16>,

    /// DMA timeline in beam order
    #[serde(default)]
    dma_events: Vec<DmaEvent>,

    /// Graphics resource catalog
    #[serde(default)]
    resources: Vec<GfxResource>,
}

/// An immutable captured frame: memory, registers, DMA timeline and
/// resource catalog
#[derive(Debug, Clone)]
pub struct Session {
    pub memory: ChipMemory,
    pub custom_regs: CustomRegisters,
    pub dma_events: Vec<DmaEvent>,
    pub resources: Vec<GfxResource>,
}

impl Session {
    /// Load a session from its manifest file
    ///
    /// # Errors
    ///
    /// [`ViewerError::Session`] for unreadable or malformed manifests,
    /// [`ViewerError::SnapshotSize`] when the memory dump does not
    /// match the declared size, [`ViewerError::Io`] for file errors.
    pub fn load<P: AsRef<Path>>(manifest_path: P) -> Result<Self> {
        let manifest_path = manifest_path.as_ref();
        let text = fs::read_to_string(manifest_path)?;
        let manifest: SessionManifest = serde_json::from_str(&text)
            .map_err(|e| ViewerError::Session(format!("bad manifest: {}", e)))?;

        let dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
        let memory_path = dir.join(&manifest.memory);
        log::info!("loading chip RAM dump from {}", memory_path.display());
        let bytes = fs::read(&memory_path)?;

        if let Some(expected) = manifest.memory_size {
            if bytes.len() != expected {
                return Err(ViewerError::SnapshotSize {
                    expected,
                    got: bytes.len(),
                });
            }
        }

        log::debug!(
            "session: {} bytes chip RAM, {} DMA events, {} resources",
            bytes.len(),
            manifest.dma_events.len(),
            manifest.resources.len()
        );

        Ok(Session {
            memory: ChipMemory::new(bytes),
            custom_regs: CustomRegisters::new(manifest.custom_regs),
            dma_events: manifest.dma_events,
            resources: manifest.resources,
        })
    }

    /// Find a resource by its registered name
    pub fn find_resource(&self, name: &str) -> Result<&GfxResource> {
        self.resources
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ViewerError::UnknownResource(name.to_string()))
    }
}
