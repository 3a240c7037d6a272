#[cfg(test)]
mod tests;

use crate::cpu::Cpu;
use crate::error::CoreError;
use crate::mmu::Mmu;

/// High-level Game Boy machine.
///
/// Holds the CPU core and the MMU and wires boot-state selection to the
/// presence of a boot ROM: with one, the CPU powers on zeroed at 0x0000
/// under the BIOS overlay; without one, it starts in the post-boot state at
/// 0x0100.
#[derive(Debug)]
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    /// Machine without a boot ROM: registers in the post-boot state.
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mmu: Mmu::new(),
        }
    }

    /// Machine with a 256-byte boot ROM mapped at 0x0000; registers and
    /// clock start zeroed.
    pub fn with_bios(bios: &[u8]) -> Result<Self, CoreError> {
        let mut mmu = Mmu::new();
        mmu.set_bios(bios)?;
        Ok(Self {
            cpu: Cpu::power_on(),
            mmu,
        })
    }

    /// Load a flat 32 KiB (MBC0) cartridge image.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CoreError> {
        self.mmu.load_rom(rom)
    }

    /// Reset CPU and memory to their initial state. ROM and boot-ROM images
    /// survive; the boot overlay is restored when one is installed.
    pub fn reset(&mut self) {
        self.mmu.reset();
        self.cpu.reset();
        if !self.mmu.is_in_bios() {
            self.cpu.apply_post_boot_state();
        }
    }

    /// Execute a single instruction; returns the M-cycles consumed.
    pub fn step(&mut self) -> Result<u32, CoreError> {
        self.cpu.step(&mut self.mmu)
    }

    /// Step until the CPU clock meets `until_m_cycles` (at least one
    /// instruction is always executed).
    pub fn run(&mut self, until_m_cycles: u64) -> Result<(), CoreError> {
        self.cpu.run(&mut self.mmu, until_m_cycles)
    }
}
