//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into form-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod contact_service;
