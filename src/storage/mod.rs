mod memory;
mod preferences;
mod schema;
mod types;

pub use memory::MemoryStorage;
pub use schema::Database;
pub use types::{DatabaseError, StorageError, TabStorage};
