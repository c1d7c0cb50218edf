//! appreg-resolver: resolve a stack's AppRegistry application name for CloudFormation
//! custom resources, falling back to a caller-supplied default.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{handle_event, resolve_application_name};
pub use app::commands::{handle, resolve};
pub use domain::{
    AppError, ApplicationRecord, ApplicationResourceMatcher, CustomAction, CustomResourceRequest,
    CustomResourceResponse, RequestType, ResolutionRequest, ResolutionResult, ResolverConfig,
    ResponseStatus, StackResourceDescriptor,
};
pub use ports::{ApplicationRegistry, StackIntrospector};
