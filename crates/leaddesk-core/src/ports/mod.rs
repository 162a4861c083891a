//! Port traits (interfaces) for dependency injection

pub mod storage;

pub use storage::{Storage, DEFAULT_IP_ADDRESS, DEFAULT_USER_AGENT, RECENT_ACTIVITY_LIMIT};
