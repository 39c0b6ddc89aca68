//! In-progress draft of a new catalog entry.

use shared::{
    domain::{DEFAULT_DRAFT_RATING, DEFAULT_DRAFT_YEAR},
    error::{DraftField, ValidationError},
    protocol::NewMovie,
};

/// Raw value of a numeric input. Text that failed to parse is kept so the user can fix it.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput<T> {
    Value(T),
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub year: NumericInput<i32>,
    pub genre: String,
    pub rating: NumericInput<f64>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: NumericInput::Value(DEFAULT_DRAFT_YEAR),
            genre: String::new(),
            rating: NumericInput::Value(DEFAULT_DRAFT_RATING),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputModel {
    draft: Draft,
}

impl FormInputModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.draft.genre = genre.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.draft.year = NumericInput::Value(year);
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.draft.rating = NumericInput::Value(rating);
    }

    pub fn set_year_input(&mut self, raw: &str) {
        // Numeric inputs accept "2009.0"; only integral values within i32 are years.
        self.draft.year = match raw.trim().parse::<f64>() {
            Ok(year)
                if year.fract() == 0.0
                    && year >= f64::from(i32::MIN)
                    && year <= f64::from(i32::MAX) =>
            {
                NumericInput::Value(year as i32)
            }
            _ => NumericInput::Invalid(raw.to_string()),
        };
    }

    pub fn set_rating_input(&mut self, raw: &str) {
        self.draft.rating = match raw.trim().parse::<f64>() {
            Ok(rating) => NumericInput::Value(rating),
            Err(_) => NumericInput::Invalid(raw.to_string()),
        };
    }

    /// Checks every field and produces the create body. Does not modify the draft.
    pub fn validate(&self) -> Result<NewMovie, ValidationError> {
        let year = match &self.draft.year {
            NumericInput::Value(year) => *year,
            NumericInput::Invalid(input) => {
                return Err(ValidationError::Unparsable {
                    field: DraftField::Year,
                    input: input.clone(),
                })
            }
        };
        let rating = match &self.draft.rating {
            NumericInput::Value(rating) => *rating,
            NumericInput::Invalid(input) => {
                return Err(ValidationError::Unparsable {
                    field: DraftField::Rating,
                    input: input.clone(),
                })
            }
        };
        NewMovie::new(
            self.draft.title.as_str(),
            year,
            self.draft.genre.as_str(),
            rating,
        )
    }

    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }
}
