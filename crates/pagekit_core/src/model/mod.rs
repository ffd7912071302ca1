//! Domain model for the contact table and the slide carousel.
//!
//! # Responsibility
//! - Define the records persisted by `ContactStore`.
//! - Define the immutable slide content driven by `CarouselController`.
//!
//! # Invariants
//! - List position is the presentation identity of a contact; `Contact::id`
//!   is stable across deletions of other rows.
//! - A `SlideSet` is never empty and never changes after construction.

pub mod contact;
pub mod slide;
