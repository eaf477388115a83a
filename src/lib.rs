#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc // TODO
)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod asynch;
pub mod blocking;
mod buffer;
mod parse_buffer;
mod server_name;

pub use buffer::EncodeBuffer;
pub use parse_buffer::ParseBuffer;
pub use server_name::{NameType, ServerName};

/// Errors raised by the SNI entry codec.
///
/// All of these are synchronous and non-retryable; a failed construction
/// or decode never yields a partial [`ServerName`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SniError {
    /// Name data was empty or longer than 65535 bytes.
    InvalidLength,
    /// The text construction path only supports the host name type.
    UnsupportedNameType,
    /// A host-name view was requested for a record with a different tag.
    NotHostName,
    /// Name data of a host-name record was not well-formed UTF-8.
    InvalidUtf8,
    /// The input ended before the declared name length was satisfied.
    TruncatedInput,
    /// The output buffer was too small for the encoded record.
    InsufficientSpace,
    /// Error from the underlying transport, passed through unchanged.
    Io(embedded_io::ErrorKind),
}
