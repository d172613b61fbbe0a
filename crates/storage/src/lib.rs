//! Storage abstraction and implementations for coursetrack.
//!
//! This crate provides the opaque-blob store interface progress records
//! persist through, with file-backed and in-memory implementations.

#![warn(missing_docs)]

pub mod json_store;
pub mod memory;
pub mod trait_;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use trait_::{ProgressStore, Result, StoreError};
