//! Live config reload manager.
//!
//! Combines the file watcher with config loading so that edits to the
//! config file reach the running guard without a restart.

mod manager;


pub use manager::ReloadManager;
