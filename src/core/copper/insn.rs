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

//! Copper instruction encoding and disassembly
//!
//! Every Copper instruction is two 16-bit words (IR1, IR2):
//!
//! | Kind | IR1 bit 0 | IR2 bit 0 | Fields |
//! |------|-----------|-----------|--------|
//! | MOVE | 0         | -         | IR1 bits 1-8: register offset; IR2: data |
//! | WAIT | 1         | 0         | IR1: VP (bits 8-15), HP (bits 1-7); IR2: VE, HE, BFD |
//! | SKIP | 1         | 1         | same layout as WAIT |
//!
//! The canonical end-of-list idiom is `WAIT $FFFF, $FFFE`, a beam
//! position that never arrives.

use std::fmt;

use crate::core::registers;

/// One decoded Copper instruction
///
/// # Examples
///
/// ```
/// use denise::core::copper::CopperInsn;
///
/// let insn = CopperInsn::parse(0x0180, 0x0FFF);
/// assert_eq!(insn, CopperInsn::Move { reg: 0x180, value: 0x0FFF });
/// assert_eq!(insn.to_string(), "MOVE COLOR00, #$0FFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopperInsn {
    /// Write `value` to the custom register at byte offset `reg`
    Move { reg: u16, value: u16 },

    /// Stall until the beam reaches (`vp`, `hp`), compared under the
    /// enable masks `ve`/`he`; `blitter_finish_disable` drops the
    /// implicit wait for the blitter
    Wait {
        vp: u8,
        hp: u8,
        ve: u8,
        he: u8,
        blitter_finish_disable: bool,
    },

    /// Skip the next instruction once the beam has passed (`vp`, `hp`)
    Skip {
        vp: u8,
        hp: u8,
        ve: u8,
        he: u8,
        blitter_finish_disable: bool,
    },
}

impl CopperInsn {
    /// Decode an instruction from its two raw words
    pub fn parse(ir1: u16, ir2: u16) -> Self {
        if ir1 & 1 == 0 {
            CopperInsn::Move {
                reg: ir1 & 0x01FE,
                value: ir2,
            }
        } else {
            let vp = (ir1 >> 8) as u8;
            let hp = (ir1 & 0xFE) as u8;
            let ve = ((ir2 >> 8) & 0x7F) as u8;
            let he = (ir2 & 0xFE) as u8;
            let bfd = ir2 & 0x8000 != 0;
            if ir2 & 1 == 0 {
                CopperInsn::Wait {
                    vp,
                    hp,
                    ve,
                    he,
                    blitter_finish_disable: bfd,
                }
            } else {
                CopperInsn::Skip {
                    vp,
                    hp,
                    ve,
                    he,
                    blitter_finish_disable: bfd,
                }
            }
        }
    }

    /// Whether this is the end-of-list idiom (a wait for a beam
    /// position that never arrives)
    pub fn is_end(&self) -> bool {
        matches!(
            self,
            CopperInsn::Wait {
                vp: 0xFF,
                hp: 0xFE,
                ve: 0x7F,
                he: 0xFE,
                ..
            }
        )
    }
}

fn fmt_position(
    f: &mut fmt::Formatter<'_>,
    mnemonic: &str,
    vp: u8,
    hp: u8,
    ve: u8,
    he: u8,
    bfd: bool,
) -> fmt::Result {
    write!(f, "{} vp=${:02X}, hp=${:02X}", mnemonic, vp, hp)?;
    if ve != 0x7F || he != 0xFE {
        write!(f, ", ve=${:02X}, he=${:02X}", ve, he)?;
    }
    if bfd {
        write!(f, ", BFD")?;
    }
    Ok(())
}

impl fmt::Display for CopperInsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CopperInsn::Move { reg, value } => match registers::register_name(reg) {
                Some(name) => write!(f, "MOVE {}, #${:04X}", name, value),
                None => write!(f, "MOVE ${:03X}, #${:04X}", reg, value),
            },
            CopperInsn::Wait {
                vp,
                hp,
                ve,
                he,
                blitter_finish_disable,
            } => {
                fmt_position(f, "WAIT", vp, hp, ve, he, blitter_finish_disable)?;
                if self.is_end() {
                    write!(f, " ; end of copper list")?;
                }
                Ok(())
            }
            CopperInsn::Skip {
                vp,
                hp,
                ve,
                he,
                blitter_finish_disable,
            } => fmt_position(f, "SKIP", vp, hp, ve, he, blitter_finish_disable),
        }
    }
}

/// One decoded display-list step: an instruction plus where and from
/// what address the Copper fetched it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopperEntry {
    /// Vertical beam position of the IR1 fetch
    pub vpos: u16,

    /// Horizontal beam position of the IR1 fetch
    pub hpos: u16,

    /// Chip RAM address the instruction was fetched from
    pub address: u32,

    /// Raw instruction words (IR1, IR2)
    pub raw: [u16; 2],

    /// Decoded instruction
    pub insn: CopperInsn,
}

impl fmt::Display for CopperEntry {
    /// Listing format of the debugger panel:
    /// `L044C020 $00012340: MOVE COLOR00, #$0FFF`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L{:03}C{:03} ${:08X}: {}",
            self.vpos, self.hpos, self.address, self.insn
        )
    }
}
