/// Multi-input validation command.
pub mod check;
/// Single-document decode command.
pub mod parse;
/// Text tree rendering for decoded values.
pub mod print;
/// Shared input, option, and JSON helpers.
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
