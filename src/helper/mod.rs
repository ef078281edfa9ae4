use crate::models::db_operations::DbError;
use thiserror::Error;

pub mod export_helpers;
pub mod library_helpers;
pub mod message_templates;
pub mod planner_helpers;
pub mod press_helpers;
pub mod profile_helpers;
pub mod sanitization_helpers;
pub mod script_helpers;
pub mod settings_helpers;
pub mod slogan_helpers;
pub mod speech_helpers;
pub mod templates;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
}

impl HelperError {
    pub fn validation(message: impl Into<String>) -> Self {
        HelperError::Validation(message.into())
    }

    /// True for both a missing id reported by the store and one detected by a helper.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HelperError::NotFound(_) | HelperError::Db(DbError::NotFound(_)))
    }
}

/// Fails with a validation error naming `label` when `value` is blank.
pub(crate) fn require(value: &str, label: &str) -> Result<(), HelperError> {
    if value.trim().is_empty() {
        Err(HelperError::validation(format!("{} is required", label)))
    } else {
        Ok(())
    }
}
