//! Workout creation form
//!
//! The draft owns the workout under construction and the exercise currently being edited. The
//! view forwards raw input to it and renders its state: the exercise list, the error messages of
//! the blocking error dialog and the preview card.

use std::collections::BTreeSet;

use crate::{
    Exercise, ExerciseCandidate, ExerciseError, ExerciseKind, ExerciseValidator, Workout,
    WorkoutType,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Sets,
    Reps,
    Minutes,
    Seconds,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    pub title: String,
    pub kind: ExerciseKind,
    pub sets: i64,
    pub reps: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl ExerciseForm {
    #[must_use]
    pub fn candidate(&self) -> ExerciseCandidate {
        match self.kind {
            ExerciseKind::SetsReps => ExerciseCandidate::SetsReps {
                title: self.title.clone(),
                sets: self.sets,
                reps: self.reps,
            },
            ExerciseKind::SetsMinSec => ExerciseCandidate::SetsMinSec {
                title: self.title.clone(),
                sets: self.sets,
                minutes: self.minutes,
                seconds: self.seconds,
            },
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct WorkoutDraft {
    pub title: String,
    pub kind: WorkoutType,
    exercises: Vec<Exercise>,
    current: ExerciseForm,
    errors: BTreeSet<ExerciseError>,
    delete_dialog: bool,
    validator: ExerciseValidator,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(validator: ExerciseValidator) -> Self {
        Self {
            validator,
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_kind(&mut self, kind: WorkoutType) {
        self.kind = kind;
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn current_exercise(&self) -> &ExerciseForm {
        &self.current
    }

    pub fn set_exercise_title(&mut self, title: &str) {
        self.current.title = title.to_string();
    }

    /// Number inputs deliver an empty string for missing or malformed values, which counts as 0.
    pub fn set_exercise_value(&mut self, field: ExerciseField, value: &str) {
        let value = value.trim().parse().unwrap_or(0);
        match field {
            ExerciseField::Sets => self.current.sets = value,
            ExerciseField::Reps => self.current.reps = value,
            ExerciseField::Minutes => self.current.minutes = value,
            ExerciseField::Seconds => self.current.seconds = value,
        }
    }

    pub fn set_exercise_kind(&mut self, kind: ExerciseKind) {
        match kind {
            ExerciseKind::SetsReps => {
                self.current.minutes = 0;
                self.current.seconds = 0;
            }
            ExerciseKind::SetsMinSec => {
                self.current.reps = 0;
            }
        }
        self.current.sets = 0;
        self.current.kind = kind;
    }

    /// Validates the current exercise against the exercises of the draft and appends it on
    /// success. The title and kind of the form are reset afterwards, the numbers are kept.
    pub fn add_exercise(&mut self) -> Result<(), &BTreeSet<ExerciseError>> {
        let existing_titles = self.exercises.iter().map(|e| e.title().as_str());
        match self
            .validator
            .validate(&self.current.candidate(), existing_titles)
        {
            Ok(exercise) => {
                self.exercises.push(exercise);
                self.current.title.clear();
                self.current.kind = ExerciseKind::SetsReps;
                self.errors.clear();
                Ok(())
            }
            Err(errors) => {
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeSet<ExerciseError> {
        &self.errors
    }

    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn close_errors(&mut self) {
        self.errors.clear();
    }

    pub fn delete_exercise(&mut self, index: usize) -> Option<Exercise> {
        if index < self.exercises.len() {
            Some(self.exercises.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_dialog
    }

    pub fn open_delete_dialog(&mut self) {
        self.delete_dialog = true;
    }

    pub fn close_delete_dialog(&mut self) {
        self.delete_dialog = false;
    }

    pub fn delete_workout(&mut self) {
        *self = Self::new(self.validator.clone());
    }

    /// Workout shown on the preview card, available once the draft contains an exercise.
    #[must_use]
    pub fn preview(&self) -> Option<Workout> {
        if self.exercises.is_empty() {
            return None;
        }
        Some(Workout {
            id: None,
            title: self.title.clone(),
            kind: self.kind,
            exercises: self.exercises.clone(),
            like_count: 0,
        })
    }
}
