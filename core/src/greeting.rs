//! # Greeting Model
//!
//! The single piece of domain data this tool carries: the greeting string.
//!
//! Kept in its own library crate so the value can be asserted on directly,
//! without going through the binary's stdout.

/// The fixed greeting. Lowercase, comma, no exclamation point.
pub const GREETING: &str = "hello, world";

/// Returns the greeting.
///
/// Pure and deterministic: no inputs, no side effects, the same value on
/// every call.
pub fn greeting() -> &'static str {
    GREETING
}
