use bitflags::bitflags;

bitflags! {
    /// Bits of the 16-bit real-mode `FLAGS` image saved in the frame.
    ///
    /// Only the bits BIOS services care about are named. Conversions should use
    /// [`CpuFlags::from_bits_retain`] so the unnamed bits survive a read-modify-write.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct CpuFlags: u16 {
        /// Carry. Set on return means the call failed.
        const CF = 1 << 0;
        const ZF = 1 << 6;
        const IF = 1 << 9;
    }
}

bitflags! {
    /// Control register 0 bits used by the firmware when switching modes.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Cr0: u32 {
        /// Paging.
        const PG = 1 << 31;
        /// Cache disable.
        const CD = 1 << 30;
        /// Not write-through.
        const NW = 1 << 29;
        /// Protection enable.
        const PE = 1 << 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_positions_match_x86() {
        assert_eq!(CpuFlags::CF.bits(), 0x0001);
        assert_eq!(CpuFlags::ZF.bits(), 0x0040);
        assert_eq!(CpuFlags::IF.bits(), 0x0200);

        assert_eq!(Cr0::PG.bits(), 0x8000_0000);
        assert_eq!(Cr0::CD.bits(), 0x4000_0000);
        assert_eq!(Cr0::NW.bits(), 0x2000_0000);
        assert_eq!(Cr0::PE.bits(), 0x0000_0001);
    }

    #[test]
    fn retain_keeps_unnamed_bits() {
        let mut flags = CpuFlags::from_bits_retain(0xFFFF);
        flags.remove(CpuFlags::CF);
        assert_eq!(flags.bits(), 0xFFFE);
    }
}
