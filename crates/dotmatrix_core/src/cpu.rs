mod alu;
mod exec;
mod helpers;
mod interrupts;


use crate::clock::Clock;
use crate::error::CoreError;
use crate::isa::{self, OpEntry};

pub use crate::registers::{Flag, Registers};

/// Abstraction over the Game Boy bus (memory and IO).
///
/// The opcode tables dispatch through plain function pointers, so the trait
/// is kept object-safe: executors take `&mut dyn Bus`. Word access is
/// provided in terms of the two byte accesses (little-endian).
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr) as u16;
        let hi = self.read8(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    fn write16(&mut self, addr: u16, value: u16) {
        self.write8(addr, value as u8);
        self.write8(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Execution state of the core.
///
/// `Running → Halted → Running` on a pending interrupt; `Running → Stopped →
/// Running` on an explicit host [`Cpu::resume`]. There is no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecState {
    #[default]
    Running,
    Halted,
    Stopped,
}

/// Game Boy CPU core.
///
/// Owns the register file and the M-cycle clock; memory is reached through
/// the [`Bus`] seam. One [`Cpu::step`] is one fetch/decode/execute cycle and
/// is atomic from the host's point of view.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub clock: Clock,
    /// Interrupt master enable.
    pub ime: bool,
    state: ExecState,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU in the post-boot state, for machines without a boot ROM.
    pub fn new() -> Self {
        let mut cpu = Self::power_on();
        cpu.apply_post_boot_state();
        cpu
    }

    /// CPU with all registers and the clock zeroed, for executing a boot ROM
    /// mapped at 0x0000.
    pub fn power_on() -> Self {
        Self {
            regs: Registers::default(),
            clock: Clock::new(),
            ime: false,
            state: ExecState::Running,
            ime_enable_pending: false,
            ime_enable_delay: false,
        }
    }

    /// Reset to the power-on state: all registers and all clock counters
    /// become zero.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.clock.reset();
        self.ime = false;
        self.state = ExecState::Running;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    /// Register values the DMG boot ROM leaves behind when it hands control
    /// to cartridge code at 0x0100 (per Pan Docs, as used by rboy and
    /// mooneye-gb).
    pub(crate) fn apply_post_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
        self.ime = false;
    }

    pub fn state(&self) -> ExecState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == ExecState::Halted
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ExecState::Stopped
    }

    /// Host action that leaves STOP mode.
    ///
    /// On hardware this is a joypad line going low; the joypad is an
    /// external collaborator here, so the transition is exposed directly.
    pub fn resume(&mut self) {
        if self.state == ExecState::Stopped {
            self.state = ExecState::Running;
        }
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & (1 << flag as u8)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= 1 << flag as u8;
        } else {
            self.regs.f &= !(1 << flag as u8);
        }
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Execute a single instruction (or interrupt entry) and return the
    /// number of M-cycles taken.
    ///
    /// A halted or stopped CPU still accounts one M-cycle per step so that
    /// hosts always make progress. An unimplemented opcode surfaces as an
    /// error with PC advanced past the fetched opcode byte only and the
    /// clock untouched.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32, CoreError> {
        if self.state == ExecState::Stopped {
            self.clock.advance(1);
            return Ok(1);
        }

        if let Some(cycles) = self.service_interrupts(bus) {
            self.clock.advance(cycles);
            return Ok(cycles);
        }

        if self.state == ExecState::Halted {
            self.clock.advance(1);
            return Ok(1);
        }

        let opcode = self.fetch8(bus);
        let cycles = match &isa::PRIMARY[opcode as usize] {
            OpEntry::Defined(op) => (op.execute)(self, bus, opcode),
            OpEntry::Unimplemented => {
                log::error!(
                    "unimplemented opcode 0x{opcode:02X} at PC=0x{:04X}",
                    self.regs.pc.wrapping_sub(1)
                );
                return Err(CoreError::UnimplementedOpcode {
                    opcode,
                    cb_prefixed: false,
                });
            }
        };

        self.clock.advance(cycles);
        self.apply_ime_delay();
        Ok(cycles)
    }

    /// Step until the clock accumulator meets `until_m_cycles`.
    ///
    /// At least one instruction is executed even when the budget is already
    /// exhausted, so callers are guaranteed forward progress.
    pub fn run(&mut self, bus: &mut dyn Bus, until_m_cycles: u64) -> Result<(), CoreError> {
        loop {
            self.step(bus)?;
            if self.clock.m_cycles() >= until_m_cycles {
                return Ok(());
            }
        }
    }

    /// EI takes effect one instruction late: the pending flag set by EI is
    /// promoted to a delay flag when EI itself finishes, and the delay flag
    /// enables IME when the *following* instruction finishes.
    fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_delay = true;
            self.ime_enable_pending = false;
        }
    }

    /// Formatted CPU state line for diagnostics.
    pub fn debug_state(&self) -> String {
        format!(
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} PC:{:04X} SP:{:04X} M:{}",
            self.regs.af(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.pc,
            self.regs.sp,
            self.clock.m_cycles()
        )
    }
}
