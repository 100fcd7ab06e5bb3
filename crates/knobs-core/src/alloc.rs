//! Hashing for knobs collections.
//!
//! Element tables are keyed by small integer ids, where AHash is noticeably
//! cheaper than SipHash. Ordered maps take [`RandomState`] as their hasher
//! parameter.

pub use ahash::RandomState;
