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

//! Copper module tests
//!
//! Tests are organized into the following modules:
//! - `decode`: event pairing, truncation, position metadata
//! - `screen`: geometry reconstruction from MOVE sequences
//! - `disasm`: instruction parsing and listing format


use crate::core::dma::DmaEvent;
use crate::core::mem::ChipMemory;
use crate::core::registers::COPINS;

/// Place a copper program at address 0 and synthesize its COPINS
/// fetch timeline (one event per word, ascending beam positions)
pub fn program(words: &[u16]) -> (ChipMemory, Vec<DmaEvent>) {
    let mut bytes = Vec::new();
    for w in words {
        bytes.extend_from_slice(&w.to_be_bytes());
    }
    let events = (0..words.len() as u32)
        .map(|i| DmaEvent {
            vpos: (i / 8) as u16,
            hpos: ((i % 8) * 2) as u16,
            reg: COPINS,
            address: i * 2,
        })
        .collect();
    (ChipMemory::new(bytes), events)
}
