use serde::{Deserialize, Serialize};

use crate::{
    domain::{MovieId, MAX_RATING, MAX_YEAR, MIN_RATING, MIN_YEAR},
    error::{DraftField, ValidationError},
};

/// A catalog entry as returned by the remote service. The id is always server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
}

/// Body of `POST /add-movie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        rating: f64,
    ) -> Result<Self, ValidationError> {
        let movie = Self {
            title: title.into().trim().to_string(),
            year,
            genre: genre.into().trim().to_string(),
            rating,
        };
        movie.validate()?;
        Ok(movie)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required(DraftField::Title));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::OutOfRange {
                field: DraftField::Year,
                min: f64::from(MIN_YEAR),
                max: f64::from(MAX_YEAR),
                value: f64::from(self.year),
            });
        }
        if self.genre.trim().is_empty() {
            return Err(ValidationError::Required(DraftField::Genre));
        }
        // NaN fails the range check as well.
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::OutOfRange {
                field: DraftField::Rating,
                min: MIN_RATING,
                max: MAX_RATING,
                value: self.rating,
            });
        }
        Ok(())
    }

    pub fn with_id(self, id: MovieId) -> MovieRecord {
        MovieRecord {
            id,
            title: self.title,
            year: self.year,
            genre: self.genre,
            rating: self.rating,
        }
    }
}
