#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod draft;
mod error;
pub mod exercise;
mod like;
mod liked_ids;
mod profanity;
mod service;
mod session;
mod title;
mod workout;

pub use draft::{ExerciseField, ExerciseForm, WorkoutDraft};
pub use error::{ReadError, StorageError, UpdateError};
pub use exercise::{Exercise, ExerciseCandidate, ExerciseError, ExerciseKind, ExerciseValidator};
pub use like::{
    LikeAction, LikeReconciler, LikeRepository, LikeRequest, LikeService, LikeState, LikeStatus,
    Toggle, ToggleError,
};
pub use liked_ids::{LikedIDStore, Subscription};
pub use profanity::ProfanityFilter;
pub use service::Service;
pub use session::SessionRepository;
pub use title::ExerciseTitle;
pub use workout::{CardOptions, Workout, WorkoutID, WorkoutType};
