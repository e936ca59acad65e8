//! The register frame layout shared with the interrupt trampoline.
//!
//! ```text
//! offset  size  field
//!   0      2    ds
//!   2      2    es
//!   4      4    edi
//!   8      4    esi
//!  12      4    ebp
//!  16      4    ebx
//!  20      4    edx
//!  24      4    ecx
//!  28      4    eax
//!  32      4    code (offset, segment)
//!  36      2    flags
//! ```
//!
//! The trampoline pushes and pops these fields in exactly this order. Any change here must be
//! mirrored in the ROM assembly.

use core::fmt;
use core::mem::{align_of, offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::{CpuFlags, FrameError, Reg16, Reg32, Result, SegOff};

/// Registers saved by the trampoline on entry to a BIOS service routine.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct RegisterFrame {
    pub ds: Reg16,
    pub es: Reg16,
    pub edi: Reg32,
    pub esi: Reg32,
    pub ebp: Reg32,
    pub ebx: Reg32,
    pub edx: Reg32,
    pub ecx: Reg32,
    pub eax: Reg32,
    /// Return address of the `INT` instruction.
    pub code: SegOff,
    pub flags: Reg16,
}

const _: () = {
    assert!(size_of::<RegisterFrame>() == 38);
    assert!(align_of::<RegisterFrame>() == 1);
    assert!(offset_of!(RegisterFrame, ds) == 0);
    assert!(offset_of!(RegisterFrame, es) == 2);
    assert!(offset_of!(RegisterFrame, edi) == 4);
    assert!(offset_of!(RegisterFrame, esi) == 8);
    assert!(offset_of!(RegisterFrame, ebp) == 12);
    assert!(offset_of!(RegisterFrame, ebx) == 16);
    assert!(offset_of!(RegisterFrame, edx) == 20);
    assert!(offset_of!(RegisterFrame, ecx) == 24);
    assert!(offset_of!(RegisterFrame, eax) == 28);
    assert!(offset_of!(RegisterFrame, code) == 32);
    assert!(offset_of!(RegisterFrame, flags) == 36);
};

macro_rules! gpr_accessors {
    ($field:ident, $set32:ident, $r16:ident, $set16:ident) => {
        #[inline]
        pub fn $field(&self) -> u32 {
            self.$field.get()
        }

        #[inline]
        pub fn $set32(&mut self, value: u32) {
            self.$field.set(value);
        }

        #[inline]
        pub fn $r16(&self) -> u16 {
            self.$field.lo16()
        }

        #[inline]
        pub fn $set16(&mut self, value: u16) {
            self.$field.set_lo16(value);
        }
    };
    (
        $field:ident, $set32:ident, $r16:ident, $set16:ident,
        $hi:ident, $set_hi:ident, $lo:ident, $set_lo:ident
    ) => {
        gpr_accessors!($field, $set32, $r16, $set16);

        #[inline]
        pub fn $hi(&self) -> u8 {
            self.$field.hi8()
        }

        #[inline]
        pub fn $set_hi(&mut self, value: u8) {
            self.$field.set_hi8(value);
        }

        #[inline]
        pub fn $lo(&self) -> u8 {
            self.$field.lo8()
        }

        #[inline]
        pub fn $set_lo(&mut self, value: u8) {
            self.$field.set_lo8(value);
        }
    };
}

impl RegisterFrame {
    pub const SIZE_BYTES: usize = size_of::<Self>();

    gpr_accessors!(edi, set_edi, di, set_di, di_hi, set_di_hi, di_lo, set_di_lo);
    gpr_accessors!(esi, set_esi, si, set_si, si_hi, set_si_hi, si_lo, set_si_lo);
    gpr_accessors!(ebp, set_ebp, bp, set_bp, bp_hi, set_bp_hi, bp_lo, set_bp_lo);
    gpr_accessors!(ebx, set_ebx, bx, set_bx, bh, set_bh, bl, set_bl);
    gpr_accessors!(edx, set_edx, dx, set_dx, dh, set_dh, dl, set_dl);
    gpr_accessors!(ecx, set_ecx, cx, set_cx, ch, set_ch, cl, set_cl);
    gpr_accessors!(eax, set_eax, ax, set_ax, ah, set_ah, al, set_al);

    #[inline]
    pub fn ds(&self) -> u16 {
        self.ds.get()
    }

    #[inline]
    pub fn set_ds(&mut self, value: u16) {
        self.ds.set(value);
    }

    #[inline]
    pub fn es(&self) -> u16 {
        self.es.get()
    }

    #[inline]
    pub fn set_es(&mut self, value: u16) {
        self.es.set(value);
    }

    #[inline]
    pub fn code(&self) -> SegOff {
        self.code
    }

    #[inline]
    pub fn set_code(&mut self, code: SegOff) {
        self.code = code;
    }

    #[inline]
    pub fn flags(&self) -> u16 {
        self.flags.get()
    }

    #[inline]
    pub fn set_flags(&mut self, value: u16) {
        self.flags.set(value);
    }

    /// The saved `FLAGS`, keeping bits that have no [`CpuFlags`] name.
    #[inline]
    pub fn cpu_flags(&self) -> CpuFlags {
        CpuFlags::from_bits_retain(self.flags.get())
    }

    #[inline]
    pub fn set_cpu_flags(&mut self, flags: CpuFlags) {
        self.flags.set(flags.bits());
    }

    /// `ES:DI`, the output buffer of most services that return a structure.
    pub fn es_di(&self) -> SegOff {
        SegOff::new(self.es(), self.di())
    }

    /// `DS:SI`, used by services that take a request packet (e.g. INT 13h extended reads).
    pub fn ds_si(&self) -> SegOff {
        SegOff::new(self.ds(), self.si())
    }

    /// View this frame as the bytes the trampoline reads back.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Copy a frame out of the first [`Self::SIZE_BYTES`] bytes of `bytes`.
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        let src = bytes.get(..Self::SIZE_BYTES).ok_or(FrameError::Truncated {
            len: bytes.len(),
            expected: Self::SIZE_BYTES,
        })?;
        Ok(bytemuck::pod_read_unaligned(src))
    }

    /// Store this frame into the first [`Self::SIZE_BYTES`] bytes of `out`.
    pub fn write_to(&self, out: &mut [u8]) -> Result<()> {
        let len = out.len();
        let dst = out
            .get_mut(..Self::SIZE_BYTES)
            .ok_or(FrameError::Truncated {
                len,
                expected: Self::SIZE_BYTES,
            })?;
        dst.copy_from_slice(self.as_bytes());
        Ok(())
    }

    /// Overlay a frame on the trampoline's save area without copying.
    ///
    /// Writes through the returned reference land directly in `bytes`, so the trampoline sees
    /// them when it restores registers.
    pub fn view_mut(bytes: &mut [u8]) -> Result<&mut Self> {
        let len = bytes.len();
        let area = bytes
            .get_mut(..Self::SIZE_BYTES)
            .ok_or(FrameError::Truncated {
                len,
                expected: Self::SIZE_BYTES,
            })?;
        // Alignment is 1 and the length is exact, so the cast cannot fail.
        Ok(bytemuck::from_bytes_mut(area))
    }
}

impl fmt::Display for RegisterFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "   a={:08x}  b={:08x}  c={:08x}  d={:08x} ds={:04x} es={:04x}",
            self.eax(),
            self.ebx(),
            self.ecx(),
            self.edx(),
            self.ds(),
            self.es(),
        )?;
        write!(
            f,
            "  si={:08x} di={:08x} bp={:08x} code={} f={:04x}",
            self.esi(),
            self.edi(),
            self.ebp(),
            self.code,
            self.flags(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_accessors_alias_the_same_register() {
        let mut frame = RegisterFrame::default();
        frame.set_eax(0xDEAD_BEEF);
        assert_eq!(frame.ax(), 0xBEEF);
        assert_eq!(frame.ah(), 0xBE);
        assert_eq!(frame.al(), 0xEF);

        frame.set_ah(0x12);
        assert_eq!(frame.eax(), 0xDEAD_12EF);
        assert_eq!(frame.eax.hi8(), 0x12);
    }

    #[test]
    fn index_registers_expose_byte_halves() {
        let mut frame = RegisterFrame::default();
        frame.set_edi(0x1234_5678);
        assert_eq!(frame.di_hi(), 0x56);
        assert_eq!(frame.di_lo(), 0x78);

        frame.set_si_lo(0xAA);
        frame.set_si_hi(0xBB);
        assert_eq!(frame.esi(), 0x0000_BBAA);

        frame.set_ebp(0xFFFF_FFFF);
        frame.set_bp_hi(0x00);
        assert_eq!(frame.ebp(), 0xFFFF_00FF);
        assert_eq!(frame.bp_lo(), 0xFF);
        assert_eq!(frame.edi(), 0x1234_5678);
    }

    #[test]
    fn dump_lists_every_register() {
        let mut frame = RegisterFrame::default();
        frame.set_eax(0x0000_4F00);
        frame.set_es(0x2000);
        frame.set_code(SegOff::new(0x0000, 0x7C42));
        frame.set_flags(0x0202);

        let dump = frame.to_string();
        assert!(dump.contains("a=00004f00"), "{dump}");
        assert!(dump.contains("es=2000"), "{dump}");
        assert!(dump.contains("code=0000:7c42"), "{dump}");
        assert!(dump.contains("f=0202"), "{dump}");
        assert_eq!(dump.lines().count(), 2);
    }
}
