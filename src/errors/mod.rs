//! Error types for the toolkit.
//!
//! Ordinary parse failure carries no error at all, it is `Ok(None)`. The
//! types here cover what is left:
//!
//! - The fatal error raised by `or_throw`
//! - Whole-input parsing that matched nothing or left input behind
//! - Evaluation failures of the bundled calculator

pub mod errors;

#[cfg(test)]
mod tests;
