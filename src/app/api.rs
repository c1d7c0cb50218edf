//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::aws::AwsCredentials;
use crate::adapters::{HttpApplicationRegistry, HttpStackIntrospector};
use crate::app::AppContext;
use crate::app::commands::{handle, resolve};

pub use crate::domain::{
    AppError, CustomResourceRequest, CustomResourceResponse, ResolutionRequest, ResolutionResult,
    ResolverConfig,
};

/// Create an `AppContext` backed by the AWS HTTP adapters.
fn create_context(
    config: &ResolverConfig,
) -> Result<AppContext<HttpStackIntrospector, HttpApplicationRegistry>, AppError> {
    let credentials = AwsCredentials::from_env()?;
    let stacks = HttpStackIntrospector::new(credentials.clone(), config)?;
    let registry = HttpApplicationRegistry::new(credentials, config)?;
    Ok(AppContext::new(stacks, registry, config.resource_matcher()))
}

/// Resolve the AppRegistry application name of a stack, falling back to `default_name`.
pub fn resolve_application_name(
    stack_id: &str,
    default_name: &str,
    config: &ResolverConfig,
) -> Result<ResolutionResult, AppError> {
    let ctx = create_context(config)?;
    resolve::execute(&ctx, &ResolutionRequest::new(stack_id, default_name))
}

/// Handle a custom-resource request and produce its response envelope.
///
/// AWS clients are only set up for actions that call AWS. Failures, including
/// missing credentials, are reported as a `FAILED` response.
pub fn handle_event(
    request: &CustomResourceRequest,
    config: &ResolverConfig,
) -> CustomResourceResponse {
    handle::execute_with(request, || create_context(config))
}
