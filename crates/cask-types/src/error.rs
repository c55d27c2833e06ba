use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{resource} response missing required fields: {}", .fields.join(", "))]
    MissingFields {
        resource: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{resource} response is not a JSON {expected}")]
    UnexpectedShape {
        resource: &'static str,
        expected: &'static str,
    },
}

impl DecodeError {
    /// Shorthand for a [`DecodeError::MissingFields`].
    pub fn missing(resource: &'static str, fields: Vec<&'static str>) -> Self {
        Self::MissingFields { resource, fields }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;
