use maison_domain::Step;
use thiserror::Error;

use crate::validation::ValidationFailure;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(ValidationFailure),
    #[error("Booking is not ready to submit: still on the {0} step")]
    StepIncomplete(Step),
    #[error("Booking has already been submitted")]
    AlreadySubmitted,
    #[error("Invalid room catalog: {0}")]
    InvalidCatalog(String),
}

impl From<ValidationFailure> for CoreError {
    fn from(failure: ValidationFailure) -> Self {
        CoreError::Validation(failure)
    }
}
