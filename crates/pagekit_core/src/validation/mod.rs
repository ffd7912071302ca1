//! Input validation rules.
//!
//! # Invariants
//! - Validators are pure: no storage access, no logging of field values.

pub mod form;
