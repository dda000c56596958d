//! Sri Lankan NIC number decoder.
//!
//! A NIC number encodes the holder's birth year and a gender-shifted
//! day-of-year. Decoding is a pure, deterministic function with exactly one
//! failure class (invalid format); no I/O and no dependencies beyond chrono.
//!
//! # Quick start
//!
//! ```
//! use upandina_nic::decode;
//!
//! let identity = decode("198515602345").unwrap();
//! assert_eq!(identity.birth_date.to_string(), "1985-06-05");
//! ```

pub mod error;
mod decode;

pub use decode::decode;
pub use error::{Error, Result};
