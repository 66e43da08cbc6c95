use crate::modules::identity::core::password::PasswordHashing;
use crate::modules::identity::use_cases::authenticate::handler::SessionGate;
use crate::modules::shift_requests::use_cases::create_request::handler::CreateRequestHandler;
use crate::modules::shift_requests::use_cases::create_submission::handler::CreateSubmissionHandler;
use crate::modules::shift_requests::use_cases::find_requests::handler::FindRequestsHandler;
use crate::modules::shift_requests::use_cases::find_submissions::handler::FindSubmissionsHandler;
use crate::shared::infrastructure::gateway::Gateway;
use crate::shared::infrastructure::session_store::SessionStore;
use chrono::Duration;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
    pub session_gate: Arc<SessionGate<dyn Gateway, dyn SessionStore>>,
    pub create_request: Arc<CreateRequestHandler<dyn Gateway>>,
    pub find_requests: Arc<FindRequestsHandler<dyn Gateway>>,
    pub create_submission: Arc<CreateSubmissionHandler<dyn Gateway>>,
    pub find_submissions: Arc<FindSubmissionsHandler<dyn Gateway>>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn Gateway>,
        sessions: Arc<dyn SessionStore>,
        hashing: PasswordHashing,
        session_ttl: Duration,
    ) -> Self {
        Self {
            session_gate: Arc::new(SessionGate::new(
                gateway.clone(),
                sessions,
                hashing,
                session_ttl,
            )),
            create_request: Arc::new(CreateRequestHandler::new(gateway.clone())),
            find_requests: Arc::new(FindRequestsHandler::new(gateway.clone())),
            create_submission: Arc::new(CreateSubmissionHandler::new(gateway.clone())),
            find_submissions: Arc::new(FindSubmissionsHandler::new(gateway.clone())),
            gateway,
        }
    }
}
