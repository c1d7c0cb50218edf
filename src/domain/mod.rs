pub mod application;
pub mod config;
pub mod custom_resource;
pub mod error;
pub mod resolution;
pub mod stack_resource;

pub use application::ApplicationRecord;
pub use config::{LogFormat, LoggingConfig, ResolverConfig};
pub use custom_resource::{
    CustomAction, CustomResourceRequest, CustomResourceResponse, RequestType, ResourceProperties,
    ResponseStatus,
};
pub use error::AppError;
pub use resolution::{ResolutionRequest, ResolutionResult};
pub use stack_resource::{ApplicationResourceMatcher, StackResourceDescriptor};
