mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;

/// Persistent key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";
/// Persistent key holding the selected category filter.
pub const FILTER_KEY: &str = "lastSelectedFilter";
/// Ephemeral key holding the last rendered quote line.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";
