use std::sync::{Arc, Mutex};

use crate::domain::{AppError, StackResourceDescriptor};
use crate::ports::StackIntrospector;

#[derive(Clone, Default)]
pub struct FakeStackIntrospector {
    pub resources: Vec<StackResourceDescriptor>,
    pub failure: Option<String>,
    pub requested_stacks: Arc<Mutex<Vec<String>>>,
}

impl FakeStackIntrospector {
    pub fn new(resources: Vec<StackResourceDescriptor>) -> Self {
        Self { resources, ..Self::default() }
    }

    pub fn with_resource(logical_id: &str, physical_id: &str) -> Self {
        Self::new(vec![StackResourceDescriptor::new(logical_id, physical_id)])
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn get_requested_stacks(&self) -> Vec<String> {
        self.requested_stacks.lock().unwrap().clone()
    }
}

impl StackIntrospector for FakeStackIntrospector {
    fn describe_stack_resources(
        &self,
        stack_id: &str,
    ) -> Result<Vec<StackResourceDescriptor>, AppError> {
        self.requested_stacks.lock().unwrap().push(stack_id.to_string());
        match &self.failure {
            Some(message) => Err(AppError::aws_api("CloudFormation", Some(400), message.clone())),
            None => Ok(self.resources.clone()),
        }
    }
}
