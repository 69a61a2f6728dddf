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

//! Copper display-list decoder
//!
//! The Copper executes a program of position-triggered register writes
//! that configures video output for the frame. This module rebuilds
//! that program from the frame's memory snapshot and DMA timeline:
//! each instruction is fetched through COPINS as two word accesses, so
//! pairing the COPINS events in beam order recovers the instruction
//! stream together with the beam position at which each step ran.
//!
//! Decoding is a read-only diagnostic view over potentially
//! inconsistent live memory. A program that ends mid-instruction (the
//! timeline ran out, or the fetch sequence breaks) is truncated at the
//! last valid instruction boundary, never reported as an error.
//!
//! [`screen_from_copper`] additionally reconstructs the framebuffer
//! geometry the program sets up, by scanning its MOVEs to the bitplane
//! pointer, modulo, control and display-window registers. This is a
//! best-effort reading of the program text, not a hardware emulation:
//! the last write to each register wins, exactly as it would at the
//! end of a frame with no mid-frame trickery.

mod insn;

#[cfg(test)]
mod tests;

pub use insn::{CopperEntry, CopperInsn};

use crate::core::bitmap::ScreenGeometry;
use crate::core::dma::DmaEvent;
use crate::core::mem::ChipMemory;
use crate::core::registers;

/// Maximum number of bitplanes the hardware can fetch
const MAX_PLANES: usize = 8;

/// Screen width assumed when the program never writes DDFSTRT/DDFSTOP
const DEFAULT_WIDTH: u32 = 320;

/// Screen height assumed when the program never writes DIWSTRT/DIWSTOP
const DEFAULT_HEIGHT: u32 = 256;

/// A decoded Copper program in execution order
#[derive(Debug, Clone, Default)]
pub struct CopperList {
    /// Instructions in program order (also increasing beam position)
    pub entries: Vec<CopperEntry>,

    /// True when decoding stopped before the program's end because the
    /// timeline or the fetch sequence ran out mid-instruction
    pub truncated: bool,
}

impl CopperList {
    /// Number of decoded instructions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no instruction was decoded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full program listing, one instruction per line
    pub fn disassembly(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        if self.truncated {
            out.push_str("; truncated\n");
        }
        out
    }
}

/// Decode the Copper program executed during the captured frame
///
/// `events` is the frame's DMA timeline in beam order. COPINS events
/// are paired into (IR1, IR2) fetches; the paired words are then read
/// from `mem` and decoded. The timeline bounds decoding: an IR1 fetch
/// whose IR2 never shows up (or shows up at an unrelated address)
/// truncates the program at the previous instruction.
pub fn decode_copper(mem: &ChipMemory, events: &[DmaEvent]) -> CopperList {
    let mut entries = Vec::new();
    let mut truncated = false;
    let mut pending: Option<&DmaEvent> = None;

    for ev in events.iter().filter(|e| e.reg == registers::COPINS) {
        match pending.take() {
            None => pending = Some(ev),
            Some(first) => {
                if ev.address != first.address.wrapping_add(2) {
                    log::debug!(
                        "copper fetch at ${:06X} never completed (next fetch at ${:06X})",
                        first.address,
                        ev.address
                    );
                    truncated = true;
                    break;
                }
                let ir1 = mem.read_word(first.address);
                let ir2 = mem.read_word(ev.address);
                let insn = CopperInsn::parse(ir1, ir2);
                log::trace!(
                    "copper L{:03}C{:03} ${:06X}: {:04X} {:04X}",
                    first.vpos,
                    first.hpos,
                    first.address,
                    ir1,
                    ir2
                );
                entries.push(CopperEntry {
                    vpos: first.vpos,
                    hpos: first.hpos,
                    address: first.address,
                    raw: [ir1, ir2],
                    insn,
                });
            }
        }
    }

    if pending.is_some() {
        truncated = true;
    }

    log::debug!(
        "decoded {} copper instructions{}",
        entries.len(),
        if truncated { " (truncated)" } else { "" }
    );
    CopperList { entries, truncated }
}

/// Reconstruct the framebuffer geometry a Copper program implies
///
/// Scans MOVE instructions in program order, last write per register
/// winning:
/// - BPL1PTH..BPL8PTL assemble the plane pointers (high/low pairs)
/// - BPLCON0's BPU field gives the plane count; without a BPLCON0
///   write, the count of leading consecutively-written pointers is
///   used instead
/// - BPL1MOD/BPL2MOD give the even/odd scanline modulos
///   (sign-extended; the hardware registers are signed 16-bit)
/// - DDFSTRT/DDFSTOP imply the fetch width, DIWSTRT/DIWSTOP the
///   display height; 320x256 lores PAL is assumed when absent
pub fn screen_from_copper(list: &CopperList) -> ScreenGeometry {
    let mut plane_hi = [None::<u16>; MAX_PLANES];
    let mut plane_lo = [None::<u16>; MAX_PLANES];
    let mut modulos = [0i32; 2];
    let mut bplcon0 = None;
    let (mut ddfstrt, mut ddfstop) = (None, None);
    let (mut diwstrt, mut diwstop) = (None, None);

    for entry in &list.entries {
        let CopperInsn::Move { reg, value } = entry.insn else {
            continue;
        };
        match reg {
            registers::BPL1PTH..=registers::BPL8PTL => {
                let plane = ((reg - registers::BPL1PTH) / 4) as usize;
                if reg & 2 == 0 {
                    plane_hi[plane] = Some(value);
                } else {
                    plane_lo[plane] = Some(value);
                }
            }
            registers::BPLCON0 => bplcon0 = Some(value),
            registers::BPL1MOD => modulos[0] = i32::from(value as i16),
            registers::BPL2MOD => modulos[1] = i32::from(value as i16),
            registers::DDFSTRT => ddfstrt = Some(value),
            registers::DDFSTOP => ddfstop = Some(value),
            registers::DIWSTRT => diwstrt = Some(value),
            registers::DIWSTOP => diwstop = Some(value),
            _ => {}
        }
    }

    let pointer = |p: usize| -> u32 {
        (u32::from(plane_hi[p].unwrap_or(0)) << 16) | u32::from(plane_lo[p].unwrap_or(0))
    };
    let seen = |p: usize| plane_hi[p].is_some() || plane_lo[p].is_some();

    let num_planes = match bplcon0 {
        // BPU lives in bits 12-14; ECS/AGA extend it with BPU3 (bit 4)
        Some(v) => {
            let bpu = usize::from((v >> 12) & 7) | (usize::from((v >> 4) & 1) << 3);
            bpu.min(MAX_PLANES)
        }
        None => (0..MAX_PLANES).take_while(|&p| seen(p)).count(),
    };

    let planes: Vec<u32> = (0..num_planes).map(pointer).collect();

    let width = match (ddfstrt, ddfstop) {
        // Lores fetch: one 16-pixel word per 8 color clocks
        (Some(strt), Some(stop)) if stop >= strt => u32::from((stop - strt) / 8 + 1) * 16,
        _ => DEFAULT_WIDTH,
    };

    let height = match (diwstrt, diwstop) {
        (Some(strt), Some(stop)) => {
            let vstart = u32::from(strt >> 8);
            let mut vstop = u32::from(stop >> 8);
            // VSTOP bit 8 is the inverse of bit 7
            if vstop & 0x80 == 0 {
                vstop |= 0x100;
            }
            if vstop > vstart {
                vstop - vstart
            } else {
                DEFAULT_HEIGHT
            }
        }
        _ => DEFAULT_HEIGHT,
    };

    log::debug!(
        "copper screen: {}x{}, {} planes, modulos [{}, {}]",
        width,
        height,
        planes.len(),
        modulos[0],
        modulos[1]
    );

    ScreenGeometry {
        width,
        height,
        planes,
        modulos,
    }
}
