use super::{Bus, Cpu, ExecState};

/// Interrupt flag register (IF).
const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register (IE).
const IE_ADDR: u16 = 0xFFFF;

/// Dispatch vectors in priority order: VBlank, STAT, Timer, Serial, Joypad.
const VECTOR_BASE: u16 = 0x0040;
const VECTOR_STRIDE: u16 = 0x08;

/// M-cycle cost of an interrupt entry (two idle cycles, two stack pushes,
/// one vector jump).
const DISPATCH_M_CYCLES: u32 = 5;

impl Cpu {
    /// Poll `IF & IE` and, when appropriate, enter the highest-priority
    /// pending interrupt.
    ///
    /// A pending interrupt wakes HALT regardless of IME. When IME is set the
    /// entry sequence runs: IME is cleared, the served IF bit acknowledged,
    /// PC pushed, and execution redirected to the vector. Returns the
    /// M-cycles consumed, or `None` when normal execution should proceed.
    pub(super) fn service_interrupts(&mut self, bus: &mut dyn Bus) -> Option<u32> {
        let pending = bus.read8(IF_ADDR) & bus.read8(IE_ADDR) & 0x1F;
        if pending == 0 {
            return None;
        }

        if self.state == ExecState::Halted {
            self.state = ExecState::Running;
        }

        if !self.ime {
            return None;
        }

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;

        // Lowest set bit wins: bit 0 (VBlank) has the highest priority.
        let index = pending.trailing_zeros() as u16;
        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !(1 << index));

        let ret = self.regs.pc;
        self.push16(bus, ret);
        self.regs.pc = VECTOR_BASE + index * VECTOR_STRIDE;

        Some(DISPATCH_M_CYCLES)
    }
}
