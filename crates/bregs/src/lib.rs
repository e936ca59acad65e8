//! Register frame passed between the BIOS interrupt trampoline and the service routines.
//!
//! When the guest executes `INT n` for a BIOS service, the ROM trampoline pushes every
//! general purpose register plus `DS`, `ES`, the return address and `FLAGS` into a
//! [`RegisterFrame`]. The service routine reads its arguments out of the frame, writes its
//! results back into it, and reports the outcome through `CF` and (optionally) `AH`. The
//! trampoline then restores the registers from the same bytes and `IRET`s to the guest.
//!
//! The byte layout is fixed by the trampoline's assembly and is checked at compile time; see
//! [`frame`] for the offsets.

pub mod error;
pub mod farptr;
pub mod flags;
pub mod frame;
pub mod reg;
pub mod status;

pub use error::{FrameError, Result};
pub use farptr::SegOff;
pub use flags::{CpuFlags, Cr0};
pub use frame::RegisterFrame;
pub use reg::{Reg16, Reg32};
pub use status::UNSUPPORTED;
