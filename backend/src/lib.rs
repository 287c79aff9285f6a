pub mod api;
pub mod client;
pub mod names;

mod storage;
pub use storage::{RoundStore, StoreError};
