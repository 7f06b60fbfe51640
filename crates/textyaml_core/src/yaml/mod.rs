mod decode;
mod error;
mod loader;
mod source;
mod value;

/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_reader, decode_with, parse};
/// Error, position, and result aliases.
pub use error::{DecodeError, Mark, Result};
/// Decoded value tree types.
pub use value::{Mapping, Value};
