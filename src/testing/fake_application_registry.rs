use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ApplicationRecord};
use crate::ports::ApplicationRegistry;

#[derive(Clone, Default)]
pub struct FakeApplicationRegistry {
    pub record: ApplicationRecord,
    pub failure: Option<String>,
    pub requested_applications: Arc<Mutex<Vec<String>>>,
}

impl FakeApplicationRegistry {
    pub fn new(record: ApplicationRecord) -> Self {
        Self { record, ..Self::default() }
    }

    pub fn named(name: &str) -> Self {
        Self::new(ApplicationRecord::named(name))
    }

    pub fn empty() -> Self {
        Self::new(ApplicationRecord::empty())
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn get_requested_applications(&self) -> Vec<String> {
        self.requested_applications.lock().unwrap().clone()
    }
}

impl ApplicationRegistry for FakeApplicationRegistry {
    fn get_application(&self, application: &str) -> Result<ApplicationRecord, AppError> {
        self.requested_applications.lock().unwrap().push(application.to_string());
        match &self.failure {
            Some(message) => Err(AppError::aws_api("AppRegistry", Some(500), message.clone())),
            None => Ok(self.record.clone()),
        }
    }
}
