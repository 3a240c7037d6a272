use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// 0x80–0xBF: the 8-bit ALU block, operation in bits 5–3, source in
    /// bits 2–0.
    pub(crate) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }

        if src == 6 {
            2
        } else {
            1
        }
    }

    /// 0xC6/0xCE/…/0xFE: the same ALU block with an immediate operand.
    pub(crate) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = self.fetch8(bus);

        match (opcode >> 3) & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }

        2
    }

    /// 0x07/0x0F/0x17/0x1F: RLCA/RRCA/RLA/RRA. Unlike the CB rotates, these
    /// always clear Z.
    pub(crate) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C);

        let (result, carry_out) = match opcode {
            // RLCA
            0x07 => (a.rotate_left(1), a & 0x80 != 0),
            // RRCA
            0x0F => (a.rotate_right(1), a & 0x01 != 0),
            // RLA
            0x17 => ((a << 1) | carry_in as u8, a & 0x80 != 0),
            // RRA
            0x1F => ((a >> 1) | ((carry_in as u8) << 7), a & 0x01 != 0),
            _ => unreachable!(),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        1
    }

    /// 0x09/0x19/0x29/0x39: ADD HL,rr.
    pub(crate) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            3 => self.regs.sp,
            _ => unreachable!(),
        };
        self.alu_add16_hl(value);
        2
    }

    /// 0xE8: ADD SP,r8.
    pub(crate) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        4
    }

    /// 0xF8: LD HL,SP+r8. Shares the signed-add flag behavior with ADD SP.
    pub(crate) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        3
    }

    /// 0x27: DAA.
    pub(crate) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.alu_daa();
        1
    }

    /// 0x2F: CPL. Complements A and sets both N and H.
    pub(crate) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    /// 0x37: SCF.
    pub(crate) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }

    /// 0x3F: CCF.
    pub(crate) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }
}
