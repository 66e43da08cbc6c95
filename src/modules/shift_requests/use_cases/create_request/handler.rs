use crate::modules::identity::core::capabilities::Capability;
use crate::modules::identity::use_cases::authorize::handler::require_capability;
use crate::modules::shift_requests::use_cases::create_request::command::CreateRequest;
use crate::modules::shift_requests::use_cases::create_request::decide::decide_create_request;
use crate::modules::shift_requests::use_cases::create_request::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::gateway::{Gateway, RequestId};
use std::sync::Arc;
use tracing::info;

pub struct CreateRequestHandler<G: ?Sized> {
    gateway: Arc<G>,
}

impl<G> CreateRequestHandler<G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Only managers may open a request; that is checked before the dates are.
    pub async fn handle(&self, command: CreateRequest) -> Result<RequestId, ApplicationError> {
        require_capability(&*self.gateway, command.creator_id, Capability::Manager).await?;

        match decide_create_request(command) {
            Decision::Accepted { command } => {
                let id = self
                    .gateway
                    .create_request(
                        command.creator_id,
                        &command.start_date.format(),
                        &command.end_date.format(),
                        &command.deadline.format(),
                    )
                    .await?;
                info!(request_id = id, creator_id = command.creator_id, "request created");
                Ok(id)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
