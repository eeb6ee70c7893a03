pub mod data_sync_controller;
pub mod error;
pub mod notifier;
