//! History log adapters.

mod memory;

pub use memory::InMemoryHistory;
