//! Stack introspection port definition.

use crate::domain::{AppError, StackResourceDescriptor};

/// Port for listing the resources of a deployed stack.
pub trait StackIntrospector {
    /// Return the stack's resources in service order. A single call, no pagination.
    fn describe_stack_resources(
        &self,
        stack_id: &str,
    ) -> Result<Vec<StackResourceDescriptor>, AppError>;
}

impl<T: StackIntrospector + ?Sized> StackIntrospector for &T {
    fn describe_stack_resources(
        &self,
        stack_id: &str,
    ) -> Result<Vec<StackResourceDescriptor>, AppError> {
        (**self).describe_stack_resources(stack_id)
    }
}
