use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// CB 0x00–0x3F: rotates and shifts, operation in bits 5–3, target in
    /// bits 2–0.
    pub(crate) fn exec_cb_rotate(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let operation = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(bus, target);
        let carry_in = self.get_flag(Flag::C);

        let (result, carry_out) = match operation {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA: arithmetic shift keeps the sign bit.
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP clears carry.
            6 => ((value << 4) | (value >> 4), false),
            // SRL
            7 => (value >> 1, value & 0x01 != 0),
            _ => unreachable!(),
        };

        self.write_reg8(bus, target, result);
        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry_out);

        if target == 6 {
            4
        } else {
            2
        }
    }

    /// CB 0x40–0x7F: BIT b,r. Only reads the target; C is preserved.
    pub(crate) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(bus, target);

        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);

        if target == 6 {
            3
        } else {
            2
        }
    }

    /// CB 0x80–0xBF: RES b,r. No flags are affected.
    pub(crate) fn exec_cb_res(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(bus, target) & !(1 << bit);
        self.write_reg8(bus, target, value);

        if target == 6 {
            4
        } else {
            2
        }
    }

    /// CB 0xC0–0xFF: SET b,r. No flags are affected.
    pub(crate) fn exec_cb_set(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let bit = (opcode >> 3) & 0x07;
        let target = opcode & 0x07;
        let value = self.read_reg8(bus, target) | (1 << bit);
        self.write_reg8(bus, target, value);

        if target == 6 {
            4
        } else {
            2
        }
    }
}
