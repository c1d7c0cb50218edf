mod application_registry;
mod stack_introspector;

pub use application_registry::ApplicationRegistry;
pub use stack_introspector::StackIntrospector;
