//! Handle command implementation.

use std::io::Read;
use std::path::Path;

use crate::domain::{AppError, CustomResourceRequest};

pub fn run_handle(config_path: Option<&Path>, event: &str) -> Result<(), AppError> {
    let config = super::load_and_init(config_path)?;

    let content = if event == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(event)?
    };

    let request = CustomResourceRequest::from_json(&content)?;
    let response = crate::app::api::handle_event(&request, &config);

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
