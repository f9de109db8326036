use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("descriptor {id}: field sequences disagree on slot count ({details})")]
    Validation { id: String, details: String },
}
