//! # Domain Layer
//!
//! Entities, value objects, and domain errors.
//!
//! The domain layer is pure: no I/O, no clocks, no global state. Constructors
//! validate invariants and return [`errors::DomainError`] on violation.

pub mod entities;
pub mod errors;
pub mod value_objects;
