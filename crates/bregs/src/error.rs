use thiserror::Error;

pub type Result<T> = std::result::Result<T, FrameError>;

/// Errors raised when moving a register frame in or out of guest memory.
///
/// The status operations on [`crate::RegisterFrame`] never fail; only the byte-buffer and
/// far-pointer conversions do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("register frame buffer too short: len={len} expected={expected}")]
    Truncated { len: usize, expected: usize },

    #[error("linear address {addr:#x} has no normalized real-mode segment:offset form")]
    LinearOutOfRange { addr: u32 },
}
