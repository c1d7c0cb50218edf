pub mod appregistry_http;
pub mod aws;
pub mod cloudformation_http;

pub use appregistry_http::HttpApplicationRegistry;
pub use cloudformation_http::HttpStackIntrospector;
