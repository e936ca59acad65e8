//! Reporting the outcome of a BIOS call.
//!
//! The calling convention has two channels: `CF` says whether the call failed, and `AH`
//! optionally carries a status code. Each service routine must finish with exactly one of the
//! operations below; otherwise the caller sees whatever `CF`/`AH` the guest passed in.
//!
//! The `_silent` variants only touch the frame. [`RegisterFrame::set_invalid`] and
//! [`RegisterFrame::set_unimplemented`] (and their `code` forms) also log the caller and a
//! register dump, for requests the firmware rejects or does not support.

use core::panic::Location;

use crate::{CpuFlags, RegisterFrame};

/// `AH` status for "function not supported".
pub const UNSUPPORTED: u8 = 0x86;

impl RegisterFrame {
    #[inline]
    pub fn carry(&self) -> bool {
        self.cpu_flags().contains(CpuFlags::CF)
    }

    /// Set `CF` when `cond` holds, clear it otherwise.
    #[inline]
    pub fn set_carry(&mut self, cond: bool) {
        let mut flags = self.cpu_flags();
        flags.set(CpuFlags::CF, cond);
        self.set_cpu_flags(flags);
    }

    /// Report success without touching `AH`.
    #[inline]
    pub fn set_success(&mut self) {
        self.set_carry(false);
    }

    /// Report success with `AH = 0`.
    #[inline]
    pub fn set_code_success(&mut self) {
        self.set_ah(0);
        self.set_carry(false);
    }

    /// Report failure without touching `AH`.
    #[inline]
    pub fn set_invalid_silent(&mut self) {
        self.set_carry(true);
    }

    /// Report failure with `AH = code`.
    #[inline]
    pub fn set_code_invalid_silent(&mut self, code: u8) {
        self.set_ah(code);
        self.set_carry(true);
    }

    #[track_caller]
    pub fn set_invalid(&mut self) {
        self.log_invalid(Location::caller());
        self.set_invalid_silent();
    }

    #[track_caller]
    pub fn set_code_invalid(&mut self, code: u8) {
        self.log_invalid(Location::caller());
        self.set_code_invalid_silent(code);
    }

    #[track_caller]
    pub fn set_unimplemented(&mut self) {
        self.log_unimplemented(Location::caller());
        self.set_invalid_silent();
    }

    #[track_caller]
    pub fn set_code_unimplemented(&mut self, code: u8) {
        self.log_unimplemented(Location::caller());
        self.set_code_invalid_silent(code);
    }

    fn log_invalid(&self, caller: &Location<'_>) {
        tracing::debug!(
            caller = %caller,
            ax = self.ax(),
            "invalid BIOS request\n{}",
            self
        );
    }

    fn log_unimplemented(&self, caller: &Location<'_>) {
        tracing::warn!(
            caller = %caller,
            ax = self.ax(),
            "unimplemented BIOS request\n{}",
            self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_variants_write_ah_before_carry() {
        let mut frame = RegisterFrame::default();
        frame.set_eax(0xFFFF_FFFF);

        frame.set_code_invalid_silent(UNSUPPORTED);
        assert_eq!(frame.eax(), 0xFFFF_86FF);
        assert!(frame.carry());

        frame.set_code_success();
        assert_eq!(frame.eax(), 0xFFFF_00FF);
        assert!(!frame.carry());
    }
}
