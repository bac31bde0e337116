use std::{collections::BTreeSet, ops::RangeInclusive};

use crate::{ExerciseTitle, ProfanityFilter};

pub const SETS: RangeInclusive<u32> = 1..=10;
pub const REPS: RangeInclusive<u32> = 1..=30;
pub const MINUTES: RangeInclusive<u32> = 0..=120;
pub const SECONDS: RangeInclusive<u32> = 0..=59;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    #[default]
    SetsReps,
    SetsMinSec,
}

/// Exercise as entered into the creation form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseCandidate {
    SetsReps {
        title: String,
        sets: i64,
        reps: i64,
    },
    SetsMinSec {
        title: String,
        sets: i64,
        minutes: i64,
        seconds: i64,
    },
}

impl ExerciseCandidate {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            ExerciseCandidate::SetsReps { title, .. }
            | ExerciseCandidate::SetsMinSec { title, .. } => title,
        }
    }

    #[must_use]
    pub fn sets(&self) -> i64 {
        match self {
            ExerciseCandidate::SetsReps { sets, .. }
            | ExerciseCandidate::SetsMinSec { sets, .. } => *sets,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            ExerciseCandidate::SetsReps { .. } => ExerciseKind::SetsReps,
            ExerciseCandidate::SetsMinSec { .. } => ExerciseKind::SetsMinSec,
        }
    }
}

impl From<&Exercise> for ExerciseCandidate {
    fn from(value: &Exercise) -> Self {
        match value {
            Exercise::SetsReps { title, sets, reps } => ExerciseCandidate::SetsReps {
                title: title.to_string(),
                sets: i64::from(*sets),
                reps: i64::from(*reps),
            },
            Exercise::SetsMinSec {
                title,
                sets,
                minutes,
                seconds,
            } => ExerciseCandidate::SetsMinSec {
                title: title.to_string(),
                sets: i64::from(*sets),
                minutes: i64::from(*minutes),
                seconds: i64::from(*seconds),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Exercise {
    SetsReps {
        title: ExerciseTitle,
        sets: u32,
        reps: u32,
    },
    SetsMinSec {
        title: ExerciseTitle,
        sets: u32,
        minutes: u32,
        seconds: u32,
    },
}

impl Exercise {
    #[must_use]
    pub fn title(&self) -> &ExerciseTitle {
        match self {
            Exercise::SetsReps { title, .. } | Exercise::SetsMinSec { title, .. } => title,
        }
    }

    #[must_use]
    pub fn sets(&self) -> u32 {
        match self {
            Exercise::SetsReps { sets, .. } | Exercise::SetsMinSec { sets, .. } => *sets,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Exercise::SetsReps { .. } => ExerciseKind::SetsReps,
            Exercise::SetsMinSec { .. } => ExerciseKind::SetsMinSec,
        }
    }

    /// Text shown next to the title on a workout card, e.g. "3 sets of 10 reps".
    #[must_use]
    pub fn summary(&self) -> String {
        let sets = self.sets();
        let plural = if sets > 1 { "s" } else { "" };
        match self {
            Exercise::SetsReps { reps, .. } => format!("{sets} set{plural} of {reps} reps"),
            Exercise::SetsMinSec {
                minutes, seconds, ..
            } => {
                let duration = if *minutes > 0 {
                    if *seconds > 0 {
                        format!("{minutes}:{seconds:02} minutes")
                    } else {
                        format!("{minutes} minutes")
                    }
                } else {
                    format!("{seconds} seconds")
                };
                format!("{sets} set{plural} of {duration}")
            }
        }
    }
}

/// Rule violated by an exercise candidate.
///
/// The variant order is the order in which messages are presented to the user.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExerciseError {
    #[error("Exercise titles must be between 4 and 20 characters")]
    InvalidTitleLength,
    #[error("Sets must be between 1 and 10")]
    InvalidSets,
    #[error("Reps must be between 1 and 30")]
    InvalidReps,
    #[error("Minutes must be between 0 and 120")]
    InvalidMinutes,
    #[error("Seconds must be between 0 and 59")]
    InvalidSeconds,
    #[error("Exercises must have a duration")]
    NoDuration,
    #[error("Each exercise title must be unique")]
    DuplicateTitle,
    #[error("No profanity allowed!")]
    Profanity,
}

#[derive(Debug, Default, Clone)]
pub struct ExerciseValidator {
    profanity_filter: ProfanityFilter,
}

impl ExerciseValidator {
    #[must_use]
    pub fn new(profanity_filter: ProfanityFilter) -> Self {
        Self { profanity_filter }
    }

    /// Checks every rule independently and returns either the normalized exercise or the
    /// complete set of violations.
    pub fn validate<I, S>(
        &self,
        candidate: &ExerciseCandidate,
        existing_titles: I,
    ) -> Result<Exercise, BTreeSet<ExerciseError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut errors = BTreeSet::new();

        let title = match ExerciseTitle::new(candidate.title()) {
            Ok(title) => Some(title),
            Err(err) => {
                errors.insert(err);
                None
            }
        };
        let sets = in_range(candidate.sets(), SETS, ExerciseError::InvalidSets, &mut errors);

        let exercise = match *candidate {
            ExerciseCandidate::SetsReps { reps, .. } => {
                let reps = in_range(reps, REPS, ExerciseError::InvalidReps, &mut errors);
                match (title, sets, reps) {
                    (Some(title), Some(sets), Some(reps)) => {
                        Some(Exercise::SetsReps { title, sets, reps })
                    }
                    _ => None,
                }
            }
            ExerciseCandidate::SetsMinSec {
                minutes, seconds, ..
            } => {
                if minutes == 0 && seconds == 0 {
                    errors.insert(ExerciseError::NoDuration);
                }
                let minutes =
                    in_range(minutes, MINUTES, ExerciseError::InvalidMinutes, &mut errors);
                let seconds =
                    in_range(seconds, SECONDS, ExerciseError::InvalidSeconds, &mut errors);
                match (title, sets, minutes, seconds) {
                    (Some(title), Some(sets), Some(minutes), Some(seconds)) => {
                        Some(Exercise::SetsMinSec {
                            title,
                            sets,
                            minutes,
                            seconds,
                        })
                    }
                    _ => None,
                }
            }
        };

        let trimmed_title = candidate.title().trim();

        if existing_titles
            .into_iter()
            .any(|t| t.as_ref() == trimmed_title)
        {
            errors.insert(ExerciseError::DuplicateTitle);
        }

        if self.profanity_filter.is_profane(trimmed_title) {
            errors.insert(ExerciseError::Profanity);
        }

        match exercise {
            Some(exercise) if errors.is_empty() => Ok(exercise),
            _ => Err(errors),
        }
    }
}

fn in_range(
    value: i64,
    range: RangeInclusive<u32>,
    error: ExerciseError,
    errors: &mut BTreeSet<ExerciseError>,
) -> Option<u32> {
    match u32::try_from(value) {
        Ok(value) if range.contains(&value) => Some(value),
        _ => {
            errors.insert(error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn sets_reps(title: &str, sets: i64, reps: i64) -> ExerciseCandidate {
        ExerciseCandidate::SetsReps {
            title: title.to_string(),
            sets,
            reps,
        }
    }

    fn sets_min_sec(title: &str, sets: i64, minutes: i64, seconds: i64) -> ExerciseCandidate {
        ExerciseCandidate::SetsMinSec {
            title: title.to_string(),
            sets,
            minutes,
            seconds,
        }
    }

    fn title(title: &str) -> ExerciseTitle {
        ExerciseTitle::new(title).unwrap()
    }

    fn validate(
        candidate: &ExerciseCandidate,
        existing_titles: &[&str],
    ) -> Result<Exercise, BTreeSet<ExerciseError>> {
        ExerciseValidator::default().validate(candidate, existing_titles)
    }

    #[test]
    fn test_validate_sets_reps() {
        assert_eq!(
            validate(&sets_reps("  Bench Press ", 3, 10), &[]),
            Ok(Exercise::SetsReps {
                title: title("Bench Press"),
                sets: 3,
                reps: 10
            })
        );
    }

    #[test]
    fn test_validate_sets_min_sec() {
        assert_eq!(
            validate(&sets_min_sec("Plank", 2, 1, 30), &[]),
            Ok(Exercise::SetsMinSec {
                title: title("Plank"),
                sets: 2,
                minutes: 1,
                seconds: 30
            })
        );
    }

    #[rstest]
    #[case(0, Err(BTreeSet::from([ExerciseError::InvalidSets])))]
    #[case(1, Ok(()))]
    #[case(10, Ok(()))]
    #[case(11, Err(BTreeSet::from([ExerciseError::InvalidSets])))]
    #[case(-1, Err(BTreeSet::from([ExerciseError::InvalidSets])))]
    fn test_validate_sets_boundaries(
        #[case] sets: i64,
        #[case] expected: Result<(), BTreeSet<ExerciseError>>,
    ) {
        assert_eq!(validate(&sets_reps("Squat", sets, 5), &[]).map(|_| ()), expected);
        assert_eq!(
            validate(&sets_min_sec("Squat", sets, 1, 0), &[]).map(|_| ()),
            expected
        );
    }

    #[rstest]
    #[case(0, Err(BTreeSet::from([ExerciseError::InvalidReps])))]
    #[case(1, Ok(()))]
    #[case(30, Ok(()))]
    #[case(31, Err(BTreeSet::from([ExerciseError::InvalidReps])))]
    fn test_validate_reps_boundaries(
        #[case] reps: i64,
        #[case] expected: Result<(), BTreeSet<ExerciseError>>,
    ) {
        assert_eq!(validate(&sets_reps("Squat", 3, reps), &[]).map(|_| ()), expected);
    }

    #[rstest]
    #[case(0, 0, Err(BTreeSet::from([ExerciseError::NoDuration])))]
    #[case(0, 1, Ok(()))]
    #[case(1, 0, Ok(()))]
    #[case(120, 59, Ok(()))]
    #[case(121, 0, Err(BTreeSet::from([ExerciseError::InvalidMinutes])))]
    #[case(0, 60, Err(BTreeSet::from([ExerciseError::InvalidSeconds])))]
    #[case(-1, 0, Err(BTreeSet::from([ExerciseError::InvalidMinutes])))]
    #[case(
        200,
        -5,
        Err(BTreeSet::from([ExerciseError::InvalidMinutes, ExerciseError::InvalidSeconds]))
    )]
    fn test_validate_duration(
        #[case] minutes: i64,
        #[case] seconds: i64,
        #[case] expected: Result<(), BTreeSet<ExerciseError>>,
    ) {
        assert_eq!(
            validate(&sets_min_sec("Rowing", 3, minutes, seconds), &[]).map(|_| ()),
            expected
        );
    }

    #[test]
    fn test_validate_duplicate_title_after_trim() {
        assert_eq!(
            validate(&sets_reps(" Squat ", 3, 5), &["Squat"]),
            Err(BTreeSet::from([ExerciseError::DuplicateTitle]))
        );
    }

    #[test]
    fn test_validate_duplicate_title_is_case_sensitive() {
        assert!(validate(&sets_reps("squat", 3, 5), &["Squat"]).is_ok());
    }

    #[test]
    fn test_validate_profanity() {
        assert_eq!(
            validate(&sets_reps("Shit Squat", 3, 5), &[]),
            Err(BTreeSet::from([ExerciseError::Profanity]))
        );
        assert_eq!(
            ExerciseValidator::new(ProfanityFilter::new(&["squat"]))
                .validate(&sets_reps("Front Squat", 3, 5), Vec::<String>::new()),
            Err(BTreeSet::from([ExerciseError::Profanity]))
        );
    }

    #[test]
    fn test_validate_collects_all_errors() {
        assert_eq!(
            validate(&sets_reps(" Shit ", 0, 31), &["Shit"]),
            Err(BTreeSet::from([
                ExerciseError::InvalidSets,
                ExerciseError::InvalidReps,
                ExerciseError::DuplicateTitle,
                ExerciseError::Profanity,
            ]))
        );
        assert_eq!(
            validate(&sets_min_sec("Run", 11, 0, 0), &[]),
            Err(BTreeSet::from([
                ExerciseError::InvalidTitleLength,
                ExerciseError::InvalidSets,
                ExerciseError::NoDuration,
            ]))
        );
    }

    #[rstest]
    #[case(sets_reps("  Bench Press ", 3, 10))]
    #[case(sets_min_sec(" Plank", 1, 0, 45))]
    fn test_validate_is_idempotent(#[case] candidate: ExerciseCandidate) {
        let exercise = validate(&candidate, &[]).unwrap();
        assert_eq!(
            validate(&ExerciseCandidate::from(&exercise), &[]),
            Ok(exercise)
        );
    }

    #[test]
    fn test_exercise_error_order() {
        assert_eq!(
            BTreeSet::from([
                ExerciseError::Profanity,
                ExerciseError::InvalidTitleLength,
                ExerciseError::NoDuration,
                ExerciseError::InvalidSets,
            ])
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
            vec![
                "Exercise titles must be between 4 and 20 characters",
                "Sets must be between 1 and 10",
                "Exercises must have a duration",
                "No profanity allowed!",
            ]
        );
    }

    #[rstest]
    #[case(Exercise::SetsReps { title: title("Squat"), sets: 3, reps: 10 }, "3 sets of 10 reps")]
    #[case(Exercise::SetsReps { title: title("Squat"), sets: 1, reps: 5 }, "1 set of 5 reps")]
    #[case(
        Exercise::SetsMinSec { title: title("Plank"), sets: 2, minutes: 1, seconds: 5 },
        "2 sets of 1:05 minutes"
    )]
    #[case(
        Exercise::SetsMinSec { title: title("Plank"), sets: 2, minutes: 3, seconds: 30 },
        "2 sets of 3:30 minutes"
    )]
    #[case(
        Exercise::SetsMinSec { title: title("Rowing"), sets: 1, minutes: 20, seconds: 0 },
        "1 set of 20 minutes"
    )]
    #[case(
        Exercise::SetsMinSec { title: title("Wall Sit"), sets: 4, minutes: 0, seconds: 45 },
        "4 sets of 45 seconds"
    )]
    fn test_exercise_summary(#[case] exercise: Exercise, #[case] expected: &str) {
        assert_eq!(exercise.summary(), expected);
    }

    #[test]
    fn test_exercise_accessors() {
        let exercise = Exercise::SetsMinSec {
            title: title("Plank"),
            sets: 2,
            minutes: 1,
            seconds: 0,
        };
        assert_eq!(exercise.title().as_str(), "Plank");
        assert_eq!(exercise.sets(), 2);
        assert_eq!(exercise.kind(), ExerciseKind::SetsMinSec);
        assert_eq!(
            ExerciseCandidate::from(&exercise).kind(),
            ExerciseKind::SetsMinSec
        );
    }
}
