//! Resolve command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_resolve(
    config_path: Option<&Path>,
    stack_id: &str,
    default_name: &str,
) -> Result<(), AppError> {
    let config = super::load_and_init(config_path)?;
    let result = crate::app::api::resolve_application_name(stack_id, default_name, &config)?;

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
