//! Core types of a submission cycle
//!
//! Input validation, the wire payloads, BMI buckets, notices and the pure
//! payload-to-view mapping live here. Nothing in this module does I/O.

pub mod category;
pub mod input;
pub mod notice;
pub mod payload;
pub mod traits;
pub mod view;
