mod fake_application_registry;
mod fake_stack_introspector;
mod truncated_response_server;

pub use fake_application_registry::FakeApplicationRegistry;
pub use fake_stack_introspector::FakeStackIntrospector;
pub use truncated_response_server::TruncatedResponseServer;
