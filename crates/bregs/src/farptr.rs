use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::{FrameError, Result};

/// Real-mode far pointer, stored offset first exactly as `IRET` and `LDS`/`LES` expect.
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct SegOff {
    offset: [u8; 2],
    seg: [u8; 2],
}

impl SegOff {
    pub const SIZE_BYTES: usize = core::mem::size_of::<Self>();

    pub const fn new(seg: u16, offset: u16) -> Self {
        Self {
            offset: offset.to_le_bytes(),
            seg: seg.to_le_bytes(),
        }
    }

    #[inline]
    pub const fn seg(self) -> u16 {
        u16::from_le_bytes(self.seg)
    }

    #[inline]
    pub fn set_seg(&mut self, seg: u16) {
        self.seg = seg.to_le_bytes();
    }

    #[inline]
    pub const fn offset(self) -> u16 {
        u16::from_le_bytes(self.offset)
    }

    #[inline]
    pub fn set_offset(&mut self, offset: u16) {
        self.offset = offset.to_le_bytes();
    }

    /// `seg * 16 + offset`, without A20 wrap-around.
    #[inline]
    pub const fn to_linear(self) -> u32 {
        ((self.seg() as u32) << 4) + self.offset() as u32
    }

    /// Normalized pointer (offset `0..=0xF`) for a linear address below 1 MiB.
    pub fn from_linear(addr: u32) -> Result<Self> {
        let seg = u16::try_from(addr >> 4).map_err(|_| FrameError::LinearOutOfRange { addr })?;
        Ok(Self::new(seg, (addr & 0xF) as u16))
    }

    /// The pointer as a single dword, segment in the high half.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        ((self.seg() as u32) << 16) | self.offset() as u32
    }

    pub const fn from_u32(value: u32) -> Self {
        Self::new((value >> 16) as u16, value as u16)
    }
}

impl fmt::Debug for SegOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for SegOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.seg(), self.offset())
    }
}
