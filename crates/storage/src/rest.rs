use gloo_net::http::Request;
use pumped_domain as domain;
use pumped_web_app::Settings;
use serde::{Deserialize, Serialize};

use crate::local_storage::LocalStorage;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(
        &self,
        request: Request,
    ) -> Result<gloo_net::http::Response, gloo_net::Error>;
}

#[derive(Clone, Copy)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(
        &self,
        request: Request,
    ) -> Result<gloo_net::http::Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest, T: domain::SessionRepository> {
    pub sender: S,
    pub session: T,
    pub settings: Settings,
}

impl REST<GlooNetSendRequest, LocalStorage> {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            sender: GlooNetSendRequest,
            session: LocalStorage,
            settings,
        }
    }
}

impl<S: SendRequest, T: domain::SessionRepository> domain::LikeRepository for REST<S, T> {
    async fn like_workout(
        &self,
        id: &domain::WorkoutID,
    ) -> Result<domain::LikeStatus, domain::UpdateError> {
        self.post_like("inc", id).await
    }

    async fn unlike_workout(
        &self,
        id: &domain::WorkoutID,
    ) -> Result<domain::LikeStatus, domain::UpdateError> {
        self.post_like("dec", id).await
    }
}

impl<S: SendRequest, T: domain::SessionRepository> REST<S, T> {
    async fn post_like(
        &self,
        direction: &str,
        id: &domain::WorkoutID,
    ) -> Result<domain::LikeStatus, domain::UpdateError> {
        let token = self.session.read_auth_token()?;
        let request = Request::post(&self.settings.endpoint(&format!("like/{direction}/{id}")))
            .header("Authorization", &format!("Bearer {token}"))
            .build()
            .map_err(|err| domain::UpdateError::Other(err.into()))?;
        let status: LikeStatus = self.fetch(request).await?;
        Ok(status.into())
    }

    async fn fetch<R>(&self, request: Request) -> Result<R, domain::StorageError>
    where
        R: 'static + for<'de> serde::Deserialize<'de>,
    {
        match self.sender.send_request(request).await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<R>().await {
                        Ok(data) => Ok(data),
                        Err(error) => Err(domain::StorageError::Other(
                            format!("deserialization failed: {error:?}").into(),
                        )),
                    }
                } else if response.status() == 401 {
                    Err(domain::StorageError::NoSession)
                } else {
                    Err(domain::StorageError::Other(
                        format!("{} {}", response.status(), response.status_text()).into(),
                    ))
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeStatus {
    pub liked: bool,
    pub likes: u32,
}

impl From<LikeStatus> for domain::LikeStatus {
    fn from(value: LikeStatus) -> Self {
        domain::LikeStatus {
            liked: value.liked,
            likes: value.likes,
        }
    }
}
