use derive_more::{AsRef, Deref, Display, From};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

use crate::Exercise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: Option<WorkoutID>,
    pub title: String,
    pub kind: WorkoutType,
    pub exercises: Vec<Exercise>,
    pub like_count: u32,
}

#[derive(AsRef, Deref, Debug, Display, From, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(String);

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString,
)]
pub enum WorkoutType {
    #[default]
    General,
    Powerlifting,
    Bodybuilding,
    Weightlifting,
    Endurance,
    Crossfit,
}

impl WorkoutType {
    /// Indefinite article used in headings such as "An Endurance Workout".
    #[must_use]
    pub fn article(self) -> &'static str {
        match self {
            WorkoutType::Endurance => "An",
            WorkoutType::General
            | WorkoutType::Powerlifting
            | WorkoutType::Bodybuilding
            | WorkoutType::Weightlifting
            | WorkoutType::Crossfit => "A",
        }
    }
}

/// Rendering flags passed in by the embedding view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardOptions {
    pub disable_like: bool,
    pub inspect: bool,
    pub dark_title: bool,
}
