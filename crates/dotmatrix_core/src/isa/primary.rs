use crate::cpu::Cpu;

use super::{def, OpEntry, CC_NAMES, R8_NAMES, RP2_NAMES, RP_NAMES};

fn alu_mnemonic(operation: u8, operand: &str) -> String {
    match operation {
        0 => format!("ADD A,{operand}"),
        1 => format!("ADC A,{operand}"),
        2 => format!("SUB {operand}"),
        3 => format!("SBC A,{operand}"),
        4 => format!("AND {operand}"),
        5 => format!("XOR {operand}"),
        6 => format!("OR {operand}"),
        7 => format!("CP {operand}"),
        _ => unreachable!(),
    }
}

fn alu_description(operation: u8, operand: &str) -> String {
    match operation {
        0 => format!("Add {operand} to A."),
        1 => format!("Add {operand} and the carry flag to A."),
        2 => format!("Subtract {operand} from A."),
        3 => format!("Subtract {operand} and the carry flag from A."),
        4 => format!("Bitwise AND of A and {operand}."),
        5 => format!("Bitwise XOR of A and {operand}."),
        6 => format!("Bitwise OR of A and {operand}."),
        7 => format!("Compare A with {operand} without storing the result."),
        _ => unreachable!(),
    }
}

/// Decode a primary opcode byte into its table entry.
pub(super) fn decode(opcode: u8) -> OpEntry {
    // Field names follow the usual octal decomposition of the opcode byte:
    // y = bits 5-3, z = bits 2-0, p = bits 5-4.
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = (opcode >> 4) & 0x03;

    match opcode {
        0x00 => def("NOP".into(), "No operation.".into(), Cpu::exec_nop),
        0x10 => def(
            "STOP".into(),
            "Enter STOP mode; the padding byte is consumed.".into(),
            Cpu::exec_stop,
        ),
        0x76 => def(
            "HALT".into(),
            "Suspend execution until an interrupt is pending.".into(),
            Cpu::exec_halt,
        ),

        0x01 | 0x11 | 0x21 | 0x31 => def(
            format!("LD {},d16", RP_NAMES[p as usize]),
            format!("Load a 16-bit immediate into {}.", RP_NAMES[p as usize]),
            Cpu::exec_ld_rr_d16,
        ),

        0x02 | 0x12 | 0x22 | 0x32 => {
            let target = ["(BC)", "(DE)", "(HL+)", "(HL-)"][p as usize];
            def(
                format!("LD {target},A"),
                format!("Store A at {target}."),
                Cpu::exec_ld_indirect_a,
            )
        }

        0x0A | 0x1A | 0x2A | 0x3A => {
            let source = ["(BC)", "(DE)", "(HL+)", "(HL-)"][p as usize];
            def(
                format!("LD A,{source}"),
                format!("Load A from {source}."),
                Cpu::exec_ld_a_indirect,
            )
        }

        0x03 | 0x13 | 0x23 | 0x33 => def(
            format!("INC {}", RP_NAMES[p as usize]),
            format!("Increment {}; flags untouched.", RP_NAMES[p as usize]),
            Cpu::exec_inc16_rr,
        ),

        0x0B | 0x1B | 0x2B | 0x3B => def(
            format!("DEC {}", RP_NAMES[p as usize]),
            format!("Decrement {}; flags untouched.", RP_NAMES[p as usize]),
            Cpu::exec_dec16_rr,
        ),

        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => def(
            format!("INC {}", R8_NAMES[y as usize]),
            format!("Increment {}; carry untouched.", R8_NAMES[y as usize]),
            Cpu::exec_inc8_reg,
        ),

        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => def(
            format!("DEC {}", R8_NAMES[y as usize]),
            format!("Decrement {}; carry untouched.", R8_NAMES[y as usize]),
            Cpu::exec_dec8_reg,
        ),

        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => def(
            format!("LD {},d8", R8_NAMES[y as usize]),
            format!("Load an 8-bit immediate into {}.", R8_NAMES[y as usize]),
            Cpu::exec_ld_r_d8,
        ),

        0x07 | 0x0F | 0x17 | 0x1F => {
            let mnemonic = ["RLCA", "RRCA", "RLA", "RRA"][(y & 0x03) as usize];
            def(
                mnemonic.into(),
                "Rotate A; the ejected bit lands in carry and Z is cleared.".into(),
                Cpu::exec_rotate_a,
            )
        }

        0x08 => def(
            "LD (a16),SP".into(),
            "Store SP little-endian at the immediate address.".into(),
            Cpu::exec_ld_a16_sp,
        ),

        0x09 | 0x19 | 0x29 | 0x39 => def(
            format!("ADD HL,{}", RP_NAMES[p as usize]),
            format!(
                "Add {} to HL; H from bit 11, C from bit 15, Z untouched.",
                RP_NAMES[p as usize]
            ),
            Cpu::exec_add_hl_rr,
        ),

        0x18 => def(
            "JR r8".into(),
            "Relative jump by a signed 8-bit displacement.".into(),
            Cpu::exec_jr,
        ),

        0x20 | 0x28 | 0x30 | 0x38 => {
            let cc = CC_NAMES[(y - 4) as usize];
            def(
                format!("JR {cc},r8"),
                format!("Relative jump if {cc}."),
                Cpu::exec_jr_cc,
            )
        }

        0x27 => def(
            "DAA".into(),
            "Decimal-adjust A after a BCD add or subtract.".into(),
            Cpu::exec_daa,
        ),
        0x2F => def(
            "CPL".into(),
            "Complement A; sets N and H.".into(),
            Cpu::exec_cpl,
        ),
        0x37 => def("SCF".into(), "Set the carry flag.".into(), Cpu::exec_scf),
        0x3F => def(
            "CCF".into(),
            "Complement the carry flag.".into(),
            Cpu::exec_ccf,
        ),

        0x40..=0x7F => def(
            format!("LD {},{}", R8_NAMES[y as usize], R8_NAMES[z as usize]),
            format!(
                "Copy {} into {}.",
                R8_NAMES[z as usize], R8_NAMES[y as usize]
            ),
            Cpu::exec_ld_r_r,
        ),

        0x80..=0xBF => def(
            alu_mnemonic(y, R8_NAMES[z as usize]),
            alu_description(y, R8_NAMES[z as usize]),
            Cpu::exec_alu_reg_group,
        ),

        0xC0 | 0xC8 | 0xD0 | 0xD8 => {
            let cc = CC_NAMES[(y & 0x03) as usize];
            def(
                format!("RET {cc}"),
                format!("Return if {cc}."),
                Cpu::exec_ret_cc,
            )
        }

        0xC1 | 0xD1 | 0xE1 | 0xF1 => def(
            format!("POP {}", RP2_NAMES[p as usize]),
            format!("Pop {} off the stack.", RP2_NAMES[p as usize]),
            Cpu::exec_pop_rr,
        ),

        0xC5 | 0xD5 | 0xE5 | 0xF5 => def(
            format!("PUSH {}", RP2_NAMES[p as usize]),
            format!("Push {} onto the stack.", RP2_NAMES[p as usize]),
            Cpu::exec_push_rr,
        ),

        0xC2 | 0xCA | 0xD2 | 0xDA => {
            let cc = CC_NAMES[(y & 0x03) as usize];
            def(
                format!("JP {cc},a16"),
                format!("Absolute jump if {cc}."),
                Cpu::exec_jp_cc,
            )
        }

        0xC3 => def(
            "JP a16".into(),
            "Absolute jump to the immediate address.".into(),
            Cpu::exec_jp_a16,
        ),

        0xC4 | 0xCC | 0xD4 | 0xDC => {
            let cc = CC_NAMES[(y & 0x03) as usize];
            def(
                format!("CALL {cc},a16"),
                format!("Call the immediate address if {cc}."),
                Cpu::exec_call_cc,
            )
        }

        0xCD => def(
            "CALL a16".into(),
            "Push the return address and jump to the immediate address.".into(),
            Cpu::exec_call_a16,
        ),

        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => def(
            alu_mnemonic(y, "d8"),
            alu_description(y, "an 8-bit immediate"),
            Cpu::exec_alu_imm,
        ),

        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            let target = opcode & 0x38;
            def(
                format!("RST {target:02X}H"),
                format!("Call the fixed vector 0x{target:04X}.", target = target as u16),
                Cpu::exec_rst,
            )
        }

        0xC9 => def(
            "RET".into(),
            "Pop the return address into PC.".into(),
            Cpu::exec_ret,
        ),
        0xD9 => def(
            "RETI".into(),
            "Return and enable interrupts immediately.".into(),
            Cpu::exec_reti,
        ),

        0xCB => def(
            "PREFIX CB".into(),
            "Dispatch into the CB-prefixed table.".into(),
            Cpu::exec_prefix_cb,
        ),

        0xE0 => def(
            "LDH (a8),A".into(),
            "Store A in the high page at 0xFF00 + a8.".into(),
            Cpu::exec_ldh_a8,
        ),
        0xF0 => def(
            "LDH A,(a8)".into(),
            "Load A from the high page at 0xFF00 + a8.".into(),
            Cpu::exec_ldh_a8,
        ),

        0xE2 => def(
            "LD (C),A".into(),
            "Store A in the high page at 0xFF00 + C.".into(),
            Cpu::exec_ldh_c,
        ),
        0xF2 => def(
            "LD A,(C)".into(),
            "Load A from the high page at 0xFF00 + C.".into(),
            Cpu::exec_ldh_c,
        ),

        0xE8 => def(
            "ADD SP,r8".into(),
            "Add a signed 8-bit immediate to SP; flags from the low byte.".into(),
            Cpu::exec_add_sp_r8,
        ),

        0xE9 => def("JP (HL)".into(), "Jump to HL.".into(), Cpu::exec_jp_hl),

        0xEA => def(
            "LD (a16),A".into(),
            "Store A at the immediate address.".into(),
            Cpu::exec_ld_a16_a,
        ),
        0xFA => def(
            "LD A,(a16)".into(),
            "Load A from the immediate address.".into(),
            Cpu::exec_ld_a16_a,
        ),

        0xF3 => def(
            "DI".into(),
            "Disable interrupts immediately.".into(),
            Cpu::exec_di,
        ),
        0xFB => def(
            "EI".into(),
            "Enable interrupts after the next instruction.".into(),
            Cpu::exec_ei,
        ),

        0xF8 => def(
            "LD HL,SP+r8".into(),
            "Load SP plus a signed 8-bit immediate into HL.".into(),
            Cpu::exec_ld_hl_sp_r8,
        ),
        0xF9 => def("LD SP,HL".into(), "Copy HL into SP.".into(), Cpu::exec_ld_sp_hl),

        // Reserved opcode holes on the DMG: decoding one hard-locks real
        // hardware until power-off.
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
            OpEntry::Unimplemented
        }
    }
}
