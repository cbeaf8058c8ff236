//! Attach-time resource resolution
//!
//! Drivers refer to their lines and rails by the names used in the board
//! description ("csx", "reset", "vcc", ...). The board resolves those names
//! to owned handles exactly once, when the driver is attached. Nothing on
//! the bring-up path looks resources up again.

use crate::{HalError, InputPin, OutputPin, Regulator};

/// Board description that hands out named resources
pub trait ResourceLookup {
    /// Output line handle type
    type Output: OutputPin;
    /// Input line handle type
    type Input: InputPin;
    /// Power rail handle type
    type Regulator: Regulator;

    /// Claim a line as an output
    ///
    /// The line must be configured as an output before it is returned.
    fn request_output(&mut self, name: &str) -> Result<Self::Output, HalError>;

    /// Claim a line as an input
    fn request_input(&mut self, name: &str) -> Result<Self::Input, HalError>;

    /// Claim a power rail
    fn request_regulator(&mut self, name: &str) -> Result<Self::Regulator, HalError>;
}
