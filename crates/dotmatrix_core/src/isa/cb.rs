use crate::cpu::Cpu;

use super::{def, OpEntry, R8_NAMES};

const ROTATE_NAMES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

fn rotate_description(operation: u8, target: &str) -> String {
    match operation {
        0 => format!("Rotate {target} left; bit 7 to carry and bit 0."),
        1 => format!("Rotate {target} right; bit 0 to carry and bit 7."),
        2 => format!("Rotate {target} left through carry."),
        3 => format!("Rotate {target} right through carry."),
        4 => format!("Shift {target} left into carry."),
        5 => format!("Shift {target} right arithmetically, keeping bit 7."),
        6 => format!("Swap the nibbles of {target}."),
        7 => format!("Shift {target} right logically."),
        _ => unreachable!(),
    }
}

/// Decode a CB-prefixed opcode byte into its table entry. Every combination
/// is defined.
pub(super) fn decode(opcode: u8) -> OpEntry {
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let target = R8_NAMES[z as usize];

    match opcode >> 6 {
        0 => def(
            format!("{} {target}", ROTATE_NAMES[y as usize]),
            rotate_description(y, target),
            Cpu::exec_cb_rotate,
        ),
        1 => def(
            format!("BIT {y},{target}"),
            format!("Test bit {y} of {target}; Z set if clear."),
            Cpu::exec_cb_bit,
        ),
        2 => def(
            format!("RES {y},{target}"),
            format!("Reset bit {y} of {target}."),
            Cpu::exec_cb_res,
        ),
        3 => def(
            format!("SET {y},{target}"),
            format!("Set bit {y} of {target}."),
            Cpu::exec_cb_set,
        ),
        _ => unreachable!(),
    }
}
