//! Core traits of the status convention.
//!
//! - [`StatusCarrier`]: read the status out of any participating return value
//! - [`ResultStatusExt`]: turn `Result`s back into status returns

pub mod result_ext;
pub mod status_carrier;

pub use result_ext::ResultStatusExt;
pub use status_carrier::StatusCarrier;
