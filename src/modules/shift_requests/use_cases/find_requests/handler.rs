use crate::modules::identity::core::user::User;
use crate::modules::identity::use_cases::authorize::handler::find_user;
use crate::modules::shift_requests::core::request::Request;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::gateway::{Gateway, RequestId, UserId};
use std::collections::HashMap;
use std::sync::Arc;

/// Loads a request and its creator. Either lookup missing is `NotFound`.
pub(crate) async fn load_request<G>(gateway: &G, id: RequestId) -> Result<Request, ApplicationError>
where
    G: Gateway + ?Sized,
{
    let record = gateway.get_request_by_id(id).await?;
    let creator = find_user(gateway, record.creator_id).await?;
    Ok(Request::from_record(record, creator)?)
}

pub struct FindRequestsHandler<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G> FindRequestsHandler<G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn by_id(&self, id: RequestId) -> Result<Request, ApplicationError> {
        load_request(&*self.gateway, id).await
    }

    /// Every request in ascending id order.
    pub async fn all(&self) -> Result<Vec<Request>, ApplicationError> {
        let records = self.gateway.get_requests().await?;
        let mut creators: HashMap<UserId, User> = HashMap::new();
        let mut requests = Vec::with_capacity(records.len());
        for record in records {
            let creator = match creators.get(&record.creator_id) {
                Some(user) => user.clone(),
                None => {
                    let user = find_user(&*self.gateway, record.creator_id).await?;
                    creators.insert(user.id, user.clone());
                    user
                }
            };
            requests.push(Request::from_record(record, creator)?);
        }
        Ok(requests)
    }
}
