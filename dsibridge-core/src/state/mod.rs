//! Power sequence state machine
//!
//! Describes how far a panel has been brought up. The sequence is explicit,
//! finite and strictly forward: there is no transition back to an earlier
//! state, and a failure leaves the machine where it was.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::PowerState;
