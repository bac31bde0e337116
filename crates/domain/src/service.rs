use log::{debug, error};

use crate::{LikeAction, LikeRepository, LikeRequest, LikeService, LikeStatus, UpdateError};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: expr) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: LikeRepository> LikeService for Service<R> {
    async fn send_like_request(&self, request: &LikeRequest) -> Result<LikeStatus, UpdateError> {
        let entity = format!("workout {}", request.workout_id);
        match request.action {
            LikeAction::Like => log_on_error!(
                self.repository.like_workout(&request.workout_id),
                UpdateError,
                "like",
                entity
            ),
            LikeAction::Unlike => log_on_error!(
                self.repository.unlike_workout(&request.workout_id),
                UpdateError,
                "unlike",
                entity
            ),
        }
    }
}
