//! Register storage cells.
//!
//! Both cells are plain little-endian byte arrays, so they have alignment 1 and a frame built
//! out of them can never pick up padding. Every narrower view reads or writes the bytes it
//! covers and nothing else, which is exactly how x86 aliases `EAX`/`AX`/`AH`/`AL`.

use core::fmt;

use bytemuck::{Pod, Zeroable};

/// A 16-bit register (`DS`, `ES`, `FLAGS`).
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Reg16([u8; 2]);

impl Reg16 {
    pub const fn new(value: u16) -> Self {
        Self(value.to_le_bytes())
    }

    #[inline]
    pub const fn get(self) -> u16 {
        u16::from_le_bytes(self.0)
    }

    #[inline]
    pub fn set(&mut self, value: u16) {
        self.0 = value.to_le_bytes();
    }

    #[inline]
    pub const fn lo8(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn set_lo8(&mut self, value: u8) {
        self.0[0] = value;
    }

    #[inline]
    pub const fn hi8(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn set_hi8(&mut self, value: u8) {
        self.0[1] = value;
    }
}

impl From<u16> for Reg16 {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Reg16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.get())
    }
}

/// A 32-bit general purpose register with its 16-bit and 8-bit views.
///
/// Byte `0` is the low byte (`AL`), byte `1` the high byte of the low half (`AH`), bytes
/// `2..4` the upper half that only 32-bit code can see.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Reg32([u8; 4]);

impl Reg32 {
    pub const fn new(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    #[inline]
    pub const fn get(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    #[inline]
    pub fn set(&mut self, value: u32) {
        self.0 = value.to_le_bytes();
    }

    /// `AX` view.
    #[inline]
    pub const fn lo16(self) -> u16 {
        u16::from_le_bytes([self.0[0], self.0[1]])
    }

    #[inline]
    pub fn set_lo16(&mut self, value: u16) {
        self.0[..2].copy_from_slice(&value.to_le_bytes());
    }

    /// Upper half of the 32-bit register. Has no x86 register name.
    #[inline]
    pub const fn hi16(self) -> u16 {
        u16::from_le_bytes([self.0[2], self.0[3]])
    }

    #[inline]
    pub fn set_hi16(&mut self, value: u16) {
        self.0[2..].copy_from_slice(&value.to_le_bytes());
    }

    /// Low byte of the upper half (byte 2).
    #[inline]
    pub const fn hi16_lo8(self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn set_hi16_lo8(&mut self, value: u8) {
        self.0[2] = value;
    }

    /// Top byte of the register (byte 3).
    #[inline]
    pub const fn hi16_hi8(self) -> u8 {
        self.0[3]
    }

    #[inline]
    pub fn set_hi16_hi8(&mut self, value: u8) {
        self.0[3] = value;
    }

    /// `AL` view.
    #[inline]
    pub const fn lo8(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn set_lo8(&mut self, value: u8) {
        self.0[0] = value;
    }

    /// `AH` view.
    #[inline]
    pub const fn hi8(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn set_hi8(&mut self, value: u8) {
        self.0[1] = value;
    }
}

impl From<u32> for Reg32 {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Reg32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.get())
    }
}
