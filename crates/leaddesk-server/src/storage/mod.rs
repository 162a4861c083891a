//! Storage layer
//!
//! Everything lives in process memory: DashMap tables, no persistence.
//! Data is gone when the process exits.

pub mod memory;
mod seed;
mod table;

pub use memory::MemStorage;
