use thiserror::Error;

/// Errors surfaced by the core to its host.
///
/// Errors propagate unchanged; the CPU does not attempt recovery. After a
/// failed [`crate::Cpu::step`], PC has advanced past the fetched opcode byte
/// only and the clock is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Decode hit a reserved or unimplemented table entry.
    #[error("unimplemented opcode 0x{opcode:02X} (cb prefixed: {cb_prefixed})")]
    UnimplementedOpcode { opcode: u8, cb_prefixed: bool },

    /// A memory region without a backing store was addressed.
    ///
    /// Every region in this core carries a buffer (OAM and I/O are stubs so
    /// the CPU is testable without its collaborators), so this variant is
    /// reserved for hosts that swap in partial memory maps.
    #[error("unmapped memory region at address 0x{0:04X}")]
    UnmappedRegion(u16),

    /// A ROM or boot-ROM image of the wrong length was supplied.
    #[error("invalid ROM image size: {0} bytes")]
    InvalidRomSize(usize),

    /// Reserved for timer/DMA extensions; never raised by the core alone.
    #[error("bus contention")]
    BusContention,
}
