//! TOML config file loading and creation.

mod loader;
pub(crate) mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub(crate) use loader::{read_from_path, read_or_create};
pub use paths::{create_default_config, default_config_path};
