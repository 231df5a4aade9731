pub mod alerts;
pub mod push;
pub mod quotes;
pub mod store;
pub mod watcher;
