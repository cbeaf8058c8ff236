//! Bridge transports

mod bitbang;

pub use bitbang::BridgeSpi;
