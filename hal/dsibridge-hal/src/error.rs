//! Error type shared by all capability traits

/// Failure reported by a board capability
///
/// The bring-up stack never interprets the platform code; it only carries
/// it upward so the invoking firmware can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Named resource is not described for this board
    NotFound,
    /// Resource exists but is already claimed by another owner
    Busy,
    /// Controller rejected the operation (platform error code)
    Io(i32),
}

impl HalError {
    /// Platform error code, negative errno style
    ///
    /// `NotFound` and `Busy` map to `-ENOENT` and `-EBUSY`.
    pub fn code(&self) -> i32 {
        match self {
            HalError::NotFound => -2,
            HalError::Busy => -16,
            HalError::Io(code) => *code,
        }
    }
}
