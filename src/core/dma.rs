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

//! DMA timeline events
//!
//! The emulator records one event per chipset bus access during the
//! captured frame: the beam position at which it happened, the custom
//! register the data was delivered to, and the chip RAM address it was
//! fetched from. The Copper decoder uses the COPINS events both to
//! locate instructions and as the bound on how far the program may be
//! read: an address the bus never fetched is not known-valid for this
//! frame.

use serde::{Deserialize, Serialize};

/// One recorded chipset bus access
///
/// Events arrive in beam order (increasing `vpos`, then `hpos`); the
/// decoders rely on that ordering but never on the events being dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmaEvent {
    /// Vertical beam position (scanline) of the access
    pub vpos: u16,

    /// Horizontal beam position (color clock) of the access
    pub hpos: u16,

    /// Byte offset of the custom register written by the transfer
    pub reg: u16,

    /// Chip RAM address the word was fetched from
    pub address: u32,
}
