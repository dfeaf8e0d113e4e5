use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("metadata record has empty field_name")]
    EmptyFieldName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
