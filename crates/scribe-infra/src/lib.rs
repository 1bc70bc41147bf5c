//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//! The only backend is the in-memory one; posts never outlive the process.

pub mod repository;

pub use repository::InMemoryPostRepository;
