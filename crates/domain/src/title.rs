use std::ops::RangeInclusive;

use derive_more::{AsRef, Display};

use crate::ExerciseError;

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseTitle(String);

impl ExerciseTitle {
    pub const LENGTH: RangeInclusive<usize> = 4..=20;

    pub fn new(title: &str) -> Result<Self, ExerciseError> {
        let trimmed_title = title.trim();

        if !Self::LENGTH.contains(&trimmed_title.chars().count()) {
            return Err(ExerciseError::InvalidTitleLength);
        }

        Ok(ExerciseTitle(trimmed_title.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
