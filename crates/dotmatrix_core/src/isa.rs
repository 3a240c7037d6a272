//! Opcode descriptor tables.
//!
//! Two fixed tables of exactly 256 entries each (the primary map and the
//! CB-prefixed map), built once at startup and immutable thereafter. Each
//! entry is either a defined operation descriptor or an explicit
//! [`OpEntry::Unimplemented`] marker (the reserved DMG opcode holes).
//! Dispatch is a plain array index; executors decode their operand fields
//! from the opcode byte they were registered for.

mod cb;
mod primary;

use once_cell::sync::Lazy;

use crate::cpu::{Bus, Cpu};

/// Executor signature shared by every table entry: the CPU, the bus, and
/// the opcode byte the entry was registered for; returns M-cycles consumed.
pub type OpFn = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

/// A decoded operation: display metadata plus its executor.
pub struct Opcode {
    pub mnemonic: String,
    pub description: String,
    pub execute: OpFn,
}

/// One slot of an opcode table.
pub enum OpEntry {
    Defined(Opcode),
    Unimplemented,
}

impl OpEntry {
    pub fn is_defined(&self) -> bool {
        matches!(self, OpEntry::Defined(_))
    }

    pub fn mnemonic(&self) -> Option<&str> {
        match self {
            OpEntry::Defined(op) => Some(&op.mnemonic),
            OpEntry::Unimplemented => None,
        }
    }
}

/// The unprefixed opcode map.
pub static PRIMARY: Lazy<[OpEntry; 256]> =
    Lazy::new(|| std::array::from_fn(|i| primary::decode(i as u8)));

/// The CB-prefixed opcode map: rotates/shifts/swap and the BIT/RES/SET
/// blocks over every 8-bit target. Fully defined.
pub static CB: Lazy<[OpEntry; 256]> = Lazy::new(|| std::array::from_fn(|i| cb::decode(i as u8)));

/// Register-operand names in the standard opcode-table order.
const R8_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
/// Register-pair names for the SP column (LD rr,d16 / INC rr / ADD HL,rr).
const RP_NAMES: [&str; 4] = ["BC", "DE", "HL", "SP"];
/// Register-pair names for the AF column (PUSH/POP).
const RP2_NAMES: [&str; 4] = ["BC", "DE", "HL", "AF"];
/// Branch-condition names.
const CC_NAMES: [&str; 4] = ["NZ", "Z", "NC", "C"];

fn def(mnemonic: String, description: String, execute: OpFn) -> OpEntry {
    OpEntry::Defined(Opcode {
        mnemonic,
        description,
        execute,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn primary_table_defines_everything_but_the_holes() {
        let defined = PRIMARY.iter().filter(|entry| entry.is_defined()).count();
        assert_eq!(defined, 256 - RESERVED.len());

        for opcode in RESERVED {
            assert!(
                !PRIMARY[opcode as usize].is_defined(),
                "0x{opcode:02X} should be a reserved hole"
            );
        }
    }

    #[test]
    fn cb_table_is_fully_defined() {
        assert!(CB.iter().all(|entry| entry.is_defined()));
    }

    #[test]
    fn mnemonic_spot_checks() {
        assert_eq!(PRIMARY[0x00].mnemonic(), Some("NOP"));
        assert_eq!(PRIMARY[0x01].mnemonic(), Some("LD BC,d16"));
        assert_eq!(PRIMARY[0x41].mnemonic(), Some("LD B,C"));
        assert_eq!(PRIMARY[0x76].mnemonic(), Some("HALT"));
        assert_eq!(PRIMARY[0xAF].mnemonic(), Some("XOR A"));
        assert_eq!(PRIMARY[0xC7].mnemonic(), Some("RST 00H"));
        assert_eq!(PRIMARY[0xE0].mnemonic(), Some("LDH (a8),A"));
        assert_eq!(CB[0x37].mnemonic(), Some("SWAP A"));
        assert_eq!(CB[0x7E].mnemonic(), Some("BIT 7,(HL)"));
        assert_eq!(CB[0xC0].mnemonic(), Some("SET 0,B"));
    }
}
