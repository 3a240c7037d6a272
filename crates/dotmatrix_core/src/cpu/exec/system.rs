use crate::cpu::{Bus, Cpu, ExecState};

impl Cpu {
    pub(crate) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        1
    }

    /// 0x76: suspend instruction execution until an interrupt is pending.
    pub(crate) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.state = ExecState::Halted;
        1
    }

    /// 0x10: enter STOP low-power mode.
    ///
    /// STOP is officially a 2-byte instruction; the padding byte is fetched
    /// and discarded so that PC matches hardware. The CPU dispatches no
    /// further instructions until the host calls [`Cpu::resume`].
    pub(crate) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let _padding = self.fetch8(bus);
        self.state = ExecState::Stopped;
        1
    }

    /// 0xF3: DI takes effect immediately.
    pub(crate) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        1
    }

    /// 0xFB: IME becomes 1 after the *next* instruction completes.
    pub(crate) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ime_enable_pending = true;
        1
    }
}
