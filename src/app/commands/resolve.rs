//! Application name resolution with default fallback.

use crate::app::AppContext;
use crate::domain::{AppError, ResolutionRequest, ResolutionResult};
use crate::ports::{ApplicationRegistry, StackIntrospector};

/// Resolve the AppRegistry application name for a stack.
///
/// Missing data at any step yields the request's default name. Only
/// collaborator failures are returned as errors.
pub fn execute<S, R>(
    ctx: &AppContext<S, R>,
    request: &ResolutionRequest,
) -> Result<ResolutionResult, AppError>
where
    S: StackIntrospector,
    R: ApplicationRegistry,
{
    let resources = ctx.stacks().describe_stack_resources(&request.stack_id)?;
    if resources.is_empty() {
        tracing::info!(stack_id = %request.stack_id, "stack has no resources; using default name");
        return Ok(ResolutionResult::fallback(request));
    }

    let Some(candidate) = ctx.matcher().find(&resources) else {
        tracing::info!(
            stack_id = %request.stack_id,
            resources = resources.len(),
            "no application resource in stack; using default name"
        );
        return Ok(ResolutionResult::fallback(request));
    };

    tracing::debug!(
        logical_id = %candidate.logical_resource_id,
        physical_id = %candidate.physical_resource_id,
        "looking up application"
    );
    let record = ctx.registry().get_application(&candidate.physical_resource_id)?;

    match record.display_name() {
        Some(name) => Ok(ResolutionResult::new(name)),
        None => {
            tracing::info!(
                application = %candidate.physical_resource_id,
                "registry returned no application name; using default name"
            );
            Ok(ResolutionResult::fallback(request))
        }
    }
}
