mod load_config;

pub use load_config::{apply_env_overrides, load_config, parse_config_content};
