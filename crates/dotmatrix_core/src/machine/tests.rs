use super::GameBoy;
use crate::error::CoreError;
use crate::mmu::{BIOS_SIZE, ROM_SIZE};

#[test]
fn post_boot_state_without_bios() {
    let gb = GameBoy::new();
    assert!(!gb.mmu.is_in_bios());
    assert_eq!(gb.cpu.regs.pc, 0x0100);
    assert_eq!(gb.cpu.regs.sp, 0xFFFE);
    assert_eq!(gb.cpu.regs.af(), 0x01B0);
    assert_eq!(gb.cpu.regs.bc(), 0x0013);
    assert_eq!(gb.cpu.regs.de(), 0x00D8);
    assert_eq!(gb.cpu.regs.hl(), 0x014D);
    assert_eq!(gb.cpu.clock.m_cycles(), 0);
}

#[test]
fn zeroed_state_with_bios() {
    let gb = GameBoy::with_bios(&[0u8; BIOS_SIZE]).unwrap();
    assert!(gb.mmu.is_in_bios());
    assert_eq!(gb.cpu.regs.pc, 0x0000);
    assert_eq!(gb.cpu.regs.sp, 0x0000);
    assert_eq!(gb.cpu.regs.af(), 0x0000);
}

#[test]
fn bios_of_wrong_size_is_rejected() {
    assert_eq!(
        GameBoy::with_bios(&[0u8; 16]).unwrap_err(),
        CoreError::InvalidRomSize(16)
    );
}

#[test]
fn rom_of_wrong_size_is_rejected() {
    let mut gb = GameBoy::new();
    assert_eq!(
        gb.load_rom(&[0u8; ROM_SIZE + 1]).unwrap_err(),
        CoreError::InvalidRomSize(ROM_SIZE + 1)
    );
}

#[test]
fn reset_is_idempotent() {
    let mut gb = GameBoy::new();
    let mut rom = vec![0u8; ROM_SIZE];
    rom[0x100] = 0x3C; // INC A
    gb.load_rom(&rom).unwrap();
    gb.step().unwrap();

    gb.reset();
    let pc = gb.cpu.regs.pc;
    let af = gb.cpu.regs.af();
    let cycles = gb.cpu.clock.m_cycles();

    gb.reset();
    assert_eq!(gb.cpu.regs.pc, pc);
    assert_eq!(gb.cpu.regs.af(), af);
    assert_eq!(gb.cpu.clock.m_cycles(), cycles);
    assert_eq!(cycles, 0);
}

#[test]
fn reset_with_bios_returns_to_the_overlay() {
    let mut gb = GameBoy::with_bios(&[0u8; BIOS_SIZE]).unwrap();
    gb.mmu.write_byte(0xFF50, 0x01);
    assert!(!gb.mmu.is_in_bios());

    gb.reset();
    assert!(gb.mmu.is_in_bios());
    assert_eq!(gb.cpu.regs.pc, 0x0000);
}
