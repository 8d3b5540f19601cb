//! Serial number arithmetic for Rust.
//!
//! This crate implements serial number arithmetic as defined in
//! [RFC 1982]. Serial numbers are integers in a fixed-width, cyclic number
//! space. They are used by the DNS, most prominently for the serial number
//! in a zone’s SOA record and for the signature times of RRSIG records.
//! Because the number space wraps around, the usual rules of integer
//! arithmetic do not apply. Instead, only a limited addition and a partial
//! order are defined.
//!
//! # Modules
//!
//! * [serial] contains the serial number type [`Sna`] of any width
//!   between one and 64 bits and the helper [`sna_max`],
//! * [date] contains the type [`DateSna`], a 32 bit serial number
//!   interpreted as a Unix time stamp with conversion to and from dates
//!   in `YYYYMMDDhhmmss` format, and
//! * [cmp] provides the trait [`CanonicalOrd`] that defines a total order
//!   for sorting serial numbers.
//!
//! # Reference of Feature Flags
//!
//! * `chrono`: Adds the [chrono](https://github.com/chronotope/chrono)
//!   crate as a dependency. This adds support for creating date serial
//!   numbers from chrono’s time stamps.
//! * `serde`: Enables serialization and deserialization of the serial
//!   number types via [serde](https://serde.rs/).
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//! * `tracing`: Reports rejected additions as debug events via the
//!   [tracing](https://github.com/tokio-rs/tracing) crate.
//!
//! [RFC 1982]: https://tools.ietf.org/html/rfc1982
//! [`CanonicalOrd`]: cmp::CanonicalOrd

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", test))]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod cmp;
pub mod date;
pub mod serial;

pub use self::date::{DateSna, IllegalDate};
pub use self::serial::{sna_max, AddError, InvalidSerialBits, Sna};
