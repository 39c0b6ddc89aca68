use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Year,
    Genre,
    Rating,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Year => "year",
            DraftField::Genre => "genre",
            DraftField::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.as_str())]
    Required(DraftField),
    #[error("{} must be a number, got {input:?}", .field.as_str())]
    Unparsable { field: DraftField, input: String },
    #[error("{} must be between {min} and {max}, got {value}", .field.as_str())]
    OutOfRange {
        field: DraftField,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl ValidationError {
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::Unparsable { field, .. } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}
