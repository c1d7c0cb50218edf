//! Custom-resource dispatch.

use serde_json::Map;

use crate::app::AppContext;
use crate::app::commands::resolve;
use crate::domain::{
    AppError, CustomAction, CustomResourceRequest, CustomResourceResponse, RequestType,
    ResolutionRequest,
};
use crate::ports::{ApplicationRegistry, StackIntrospector};

const DEFAULT_NAME_PROPERTY: &str = "DefaultName";

/// Handle one custom-resource request and build the response envelope.
///
/// Never fails: errors become a `FAILED` response carrying the message as `Reason`.
pub fn execute<S, R>(ctx: &AppContext<S, R>, request: &CustomResourceRequest) -> CustomResourceResponse
where
    S: StackIntrospector,
    R: ApplicationRegistry,
{
    execute_with(request, || {
        Ok(AppContext::new(ctx.stacks(), ctx.registry(), ctx.matcher().clone()))
    })
}

/// Like [`execute`], but the context is only built once an action needs the
/// collaborators. Delete events and unsupported actions never call `context`.
pub fn execute_with<S, R, F>(request: &CustomResourceRequest, context: F) -> CustomResourceResponse
where
    S: StackIntrospector,
    R: ApplicationRegistry,
    F: FnOnce() -> Result<AppContext<S, R>, AppError>,
{
    let span = tracing::info_span!(
        "custom_resource",
        action = %request.custom_action(),
        request_type = ?request.request_type,
        request_id = %request.request_id
    );
    let _entered = span.enter();

    match dispatch(request, context) {
        Ok(response) => {
            tracing::info!(stack_id = %request.stack_id, status = "SUCCESS", "custom resource handled");
            response
        }
        Err(err) => {
            tracing::error!(stack_id = %request.stack_id, status = "FAILED", error = %err, "custom resource failed");
            CustomResourceResponse::failed(err.to_string())
        }
    }
}

fn dispatch<S, R, F>(request: &CustomResourceRequest, context: F) -> Result<CustomResourceResponse, AppError>
where
    S: StackIntrospector,
    R: ApplicationRegistry,
    F: FnOnce() -> Result<AppContext<S, R>, AppError>,
{
    match request.custom_action() {
        CustomAction::GetAppRegApplicationName => get_app_reg_application_name(request, context),
        CustomAction::Unsupported(name) => Err(AppError::UnsupportedAction(name.clone())),
    }
}

fn get_app_reg_application_name<S, R, F>(
    request: &CustomResourceRequest,
    context: F,
) -> Result<CustomResourceResponse, AppError>
where
    S: StackIntrospector,
    R: ApplicationRegistry,
    F: FnOnce() -> Result<AppContext<S, R>, AppError>,
{
    if request.request_type == RequestType::Delete {
        return Ok(CustomResourceResponse::success(Map::new()));
    }

    let default_name = request.resource_properties.require_str(DEFAULT_NAME_PROPERTY)?;
    let ctx = context()?;
    let resolution = ResolutionRequest::new(request.stack_id.clone(), default_name);
    let result = resolve::execute(&ctx, &resolution)?;

    CustomResourceResponse::success_with(&result)
}
