use std::cell::RefCell;

use log::debug;

use crate::{CardOptions, LikedIDStore, UpdateError, WorkoutID};

#[allow(async_fn_in_trait)]
pub trait LikeService {
    async fn send_like_request(&self, request: &LikeRequest) -> Result<LikeStatus, UpdateError>;

    /// Performs a complete toggle of a card: optimistic update of the card and the shared liked
    /// IDs, server request and reconciliation with the response.
    ///
    /// A failed request keeps the optimistic state. The failure is logged by
    /// `send_like_request` and not reported to the caller.
    async fn toggle_like(
        &self,
        reconciler: &RefCell<LikeReconciler>,
        store: &RefCell<LikedIDStore>,
        options: CardOptions,
    ) -> Result<(), ToggleError> {
        let toggle = {
            let store = store.borrow();
            reconciler
                .borrow_mut()
                .begin_toggle(store.liked_ids().unwrap_or_default(), options)?
        };
        store.borrow_mut().replace(toggle.liked_ids);

        if let Ok(status) = self.send_like_request(&toggle.request).await {
            reconciler
                .borrow_mut()
                .apply_response(toggle.request.token, status);
        }

        Ok(())
    }
}

#[allow(async_fn_in_trait)]
pub trait LikeRepository {
    async fn like_workout(&self, id: &WorkoutID) -> Result<LikeStatus, UpdateError>;
    async fn unlike_workout(&self, id: &WorkoutID) -> Result<LikeStatus, UpdateError>;
}

/// Authoritative like state of a workout as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus {
    pub liked: bool,
    pub likes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRequest {
    pub token: u64,
    pub workout_id: WorkoutID,
    pub action: LikeAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub request: LikeRequest,
    /// Liked IDs of the session after the toggle, to be written back into the shared store.
    pub liked_ids: Vec<WorkoutID>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleError {
    #[error("like state not yet known")]
    Unresolved,
    #[error("liking is disabled")]
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Unresolved,
    Resolved { liked: bool, like_count: u32 },
}

/// Like state of a single workout card.
///
/// The card starts unresolved and is resolved by the first liked IDs of the session. Afterwards
/// it follows the shared liked IDs, the viewer's own toggles and the server responses to these
/// toggles. Only the response to the most recent toggle is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeReconciler {
    workout_id: WorkoutID,
    baseline: u32,
    state: LikeState,
    known_liked_ids: usize,
    latest_token: u64,
}

impl LikeReconciler {
    #[must_use]
    pub fn new(workout_id: WorkoutID, like_count: u32) -> Self {
        Self {
            workout_id,
            baseline: like_count,
            state: LikeState::Unresolved,
            known_liked_ids: 0,
            latest_token: 0,
        }
    }

    #[must_use]
    pub fn workout_id(&self) -> &WorkoutID {
        &self.workout_id
    }

    #[must_use]
    pub fn state(&self) -> LikeState {
        self.state
    }

    #[must_use]
    pub fn liked(&self) -> Option<bool> {
        match self.state {
            LikeState::Unresolved => None,
            LikeState::Resolved { liked, .. } => Some(liked),
        }
    }

    #[must_use]
    pub fn like_count(&self) -> Option<u32> {
        match self.state {
            LikeState::Unresolved => None,
            LikeState::Resolved { like_count, .. } => Some(like_count),
        }
    }

    /// Like count shown on the card, which hides a count of zero.
    #[must_use]
    pub fn visible_like_count(&self) -> Option<u32> {
        self.like_count().filter(|count| *count > 0)
    }

    #[must_use]
    pub fn is_toggle_enabled(&self, options: CardOptions) -> bool {
        !options.disable_like && self.state != LikeState::Unresolved
    }

    /// Reconciles the card with the shared liked IDs.
    ///
    /// Returns true if the state of the card has changed. Unknown liked IDs are ignored.
    pub fn on_liked_ids_changed(&mut self, liked_ids: Option<&[WorkoutID]>) -> bool {
        let Some(liked_ids) = liked_ids else {
            return false;
        };
        let is_member = liked_ids.contains(&self.workout_id);

        match self.state {
            LikeState::Unresolved => {
                self.state = LikeState::Resolved {
                    liked: is_member,
                    like_count: self.baseline,
                };
                self.known_liked_ids = liked_ids.len();
                true
            }
            LikeState::Resolved { liked, like_count } => {
                if liked_ids.len() == self.known_liked_ids {
                    return false;
                }
                self.known_liked_ids = liked_ids.len();
                if liked == is_member {
                    return false;
                }
                self.state = LikeState::Resolved {
                    liked: is_member,
                    like_count: if is_member {
                        like_count.saturating_add(1)
                    } else {
                        like_count.saturating_sub(1)
                    },
                };
                true
            }
        }
    }

    /// Flips the like state optimistically and creates the request for the server.
    ///
    /// The like count stays unchanged until the server responds.
    pub fn begin_toggle(
        &mut self,
        liked_ids: &[WorkoutID],
        options: CardOptions,
    ) -> Result<Toggle, ToggleError> {
        if options.disable_like {
            return Err(ToggleError::Disabled);
        }
        let LikeState::Resolved { liked, like_count } = self.state else {
            return Err(ToggleError::Unresolved);
        };

        let liked = !liked;
        let liked_ids = if liked {
            let mut liked_ids = liked_ids.to_vec();
            if !liked_ids.contains(&self.workout_id) {
                liked_ids.push(self.workout_id.clone());
            }
            liked_ids
        } else {
            liked_ids
                .iter()
                .filter(|id| **id != self.workout_id)
                .cloned()
                .collect::<Vec<_>>()
        };

        self.state = LikeState::Resolved { liked, like_count };
        self.known_liked_ids = liked_ids.len();
        self.latest_token += 1;

        Ok(Toggle {
            request: LikeRequest {
                token: self.latest_token,
                workout_id: self.workout_id.clone(),
                action: if liked {
                    LikeAction::Like
                } else {
                    LikeAction::Unlike
                },
            },
            liked_ids,
        })
    }

    /// Adopts the server's like state if the response belongs to the latest toggle.
    ///
    /// Returns false if the response was discarded.
    pub fn apply_response(&mut self, token: u64, status: LikeStatus) -> bool {
        if token != self.latest_token || self.state == LikeState::Unresolved {
            debug!(
                "discarded stale like response for workout {}",
                self.workout_id
            );
            return false;
        }
        self.state = LikeState::Resolved {
            liked: status.liked,
            like_count: status.likes,
        };
        true
    }

    /// Forgets the like state, e.g. on logout.
    ///
    /// Responses to requests issued before the reset are discarded.
    pub fn reset(&mut self) {
        self.state = LikeState::Unresolved;
        self.known_liked_ids = 0;
        self.latest_token += 1;
    }
}
