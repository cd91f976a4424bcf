//! Storage layer for atomic file operations and locking.

mod atomic_toml;
mod atomic_write;
mod file_lock;

pub use atomic_toml::AtomicTomlFile;
pub use atomic_write::{append_synced, write_atomic};
pub use file_lock::FileLock;
