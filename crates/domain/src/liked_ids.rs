use crate::WorkoutID;

type Callback = Box<dyn FnMut(Option<&[WorkoutID]>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// Session-scoped record of the workouts liked by the viewer, shared by all workout cards.
///
/// The IDs are unknown (`None`) until they have been loaded for the session and become unknown
/// again on logout. Every change is announced to all subscribers.
#[derive(Default)]
pub struct LikedIDStore {
    liked_ids: Option<Vec<WorkoutID>>,
    subscribers: Vec<(Subscription, Callback)>,
    next_subscription: u64,
}

impl LikedIDStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn liked_ids(&self) -> Option<&[WorkoutID]> {
        self.liked_ids.as_deref()
    }

    #[must_use]
    pub fn contains(&self, id: &WorkoutID) -> bool {
        self.liked_ids
            .as_ref()
            .is_some_and(|liked_ids| liked_ids.contains(id))
    }

    pub fn replace(&mut self, liked_ids: Vec<WorkoutID>) {
        self.liked_ids = Some(liked_ids);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.liked_ids = None;
        self.notify();
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(Option<&[WorkoutID]>) + 'static,
    ) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((subscription, Box::new(callback)));
        subscription
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(s, _)| *s != subscription);
    }

    fn notify(&mut self) {
        let liked_ids = self.liked_ids.as_deref();
        for (_, callback) in &mut self.subscribers {
            callback(liked_ids);
        }
    }
}

impl std::fmt::Debug for LikedIDStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikedIDStore")
            .field("liked_ids", &self.liked_ids)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
