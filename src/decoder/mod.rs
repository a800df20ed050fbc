//! Safe decoder handle over liblzma's stream decoder.
//!
//! The raw `xzdec_*` boundary in [`crate::abi`] is a thin shell over this module.

pub mod handle;
pub mod types;

pub use handle::{Decoder, InputWindow};
pub use types::{
    Action, Status, CONCATENATED, IGNORE_CHECK, SUPPORTED_FLAGS, TELL_ANY_CHECK, TELL_NO_CHECK,
    TELL_UNSUPPORTED_CHECK,
};
