use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// 0x18: JR r8.
    pub(crate) fn exec_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jr(bus, true)
    }

    /// 0x20/0x28/0x30/0x38: JR cc,r8. The operand is consumed either way.
    pub(crate) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let cond = self.condition((opcode >> 3) & 0x03);
        self.jr(bus, cond)
    }

    /// 0xC3: JP a16.
    pub(crate) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jp_cond(bus, true)
    }

    /// 0xC2/0xCA/0xD2/0xDA: JP cc,a16.
    pub(crate) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let cond = self.condition((opcode >> 3) & 0x03);
        self.jp_cond(bus, cond)
    }

    /// 0xE9: JP (HL). No memory access; PC is simply loaded from HL.
    pub(crate) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl();
        1
    }

    /// 0xC4/0xCC/0xD4/0xDC: CALL cc,a16.
    pub(crate) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let cond = self.condition((opcode >> 3) & 0x03);
        self.call_cond(bus, cond)
    }

    /// 0xC0/0xC8/0xD0/0xD8: RET cc.
    pub(crate) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        let cond = self.condition((opcode >> 3) & 0x03);
        self.ret_cond(bus, cond)
    }
}
