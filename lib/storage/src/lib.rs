pub mod manager;

pub use manager::{read_dataset, StorageManager, StorageStatus};
