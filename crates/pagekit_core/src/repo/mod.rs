//! Contact list persistence.
//!
//! # Responsibility
//! - Keep the ordered in-memory contact list in step with its snapshot in a
//!   `KeyValueStore`.
//!
//! # Invariants
//! - Every successful mutation writes the full list before returning.
//! - A failed write leaves the in-memory list as it was before the call.
//! - The repository does not validate contacts; callers do.

pub mod contact_repo;
