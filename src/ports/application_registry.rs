//! Application registry port definition.

use crate::domain::{AppError, ApplicationRecord};

/// Port for AppRegistry application lookups.
pub trait ApplicationRegistry {
    /// Fetch application metadata by name, id or ARN.
    ///
    /// An unknown application is an empty record, not an error.
    fn get_application(&self, application: &str) -> Result<ApplicationRecord, AppError>;
}

impl<T: ApplicationRegistry + ?Sized> ApplicationRegistry for &T {
    fn get_application(&self, application: &str) -> Result<ApplicationRecord, AppError> {
        (**self).get_application(application)
    }
}
