mod error;
pub use error::StorageError;

mod storage;
pub use storage::{read_history, write_history, HistoryStorage};

mod file;
pub use file::CsvHistoryFile;

mod memory;
pub use memory::MemoryHistory;

mod store;
pub use store::HistoryStore;
