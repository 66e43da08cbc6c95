use crate::modules::identity::core::capabilities::Capability;
use crate::modules::identity::core::user::User;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::gateway::{Gateway, StorageError, UserId};

pub async fn find_user<G>(gateway: &G, user_id: UserId) -> Result<User, StorageError>
where
    G: Gateway + ?Sized,
{
    let record = gateway.get_user_by_id(user_id).await?;
    User::try_from(record)
}

/// Whether `user_id` holds `capability`. An unknown user holds nothing; any
/// other storage failure is returned as is.
pub async fn has_capability<G>(
    gateway: &G,
    user_id: UserId,
    capability: Capability,
) -> Result<bool, StorageError>
where
    G: Gateway + ?Sized,
{
    match find_user(gateway, user_id).await {
        Ok(user) => Ok(user.has(capability)),
        Err(StorageError::NotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

pub async fn require_capability<G>(
    gateway: &G,
    user_id: UserId,
    capability: Capability,
) -> Result<(), ApplicationError>
where
    G: Gateway + ?Sized,
{
    if has_capability(gateway, user_id, capability).await? {
        Ok(())
    } else {
        tracing::debug!(user_id, %capability, "capability missing");
        Err(ApplicationError::Forbidden)
    }
}

#[cfg(test)]
mod authorize_tests {
    use super::*;
    use crate::shared::infrastructure::gateway::in_memory::InMemoryGateway;
    use crate::tests::fixtures::gateway::{EMPLOYEE_ID, LEAD_ID, MANAGER_ID, seeded_gateway};
    use rstest::{fixture, rstest};

    #[fixture]
    fn gateway() -> InMemoryGateway {
        seeded_gateway()
    }

    #[rstest]
    #[case(EMPLOYEE_ID, Capability::Employee, true)]
    #[case(EMPLOYEE_ID, Capability::Manager, false)]
    #[case(MANAGER_ID, Capability::Manager, true)]
    #[case(MANAGER_ID, Capability::Employee, false)]
    #[case(LEAD_ID, Capability::Employee, true)]
    #[case(LEAD_ID, Capability::Manager, true)]
    #[tokio::test]
    async fn it_should_answer_from_the_stored_mask(
        gateway: InMemoryGateway,
        #[case] user_id: UserId,
        #[case] capability: Capability,
        #[case] expected: bool,
    ) {
        let result = has_capability(&gateway, user_id, capability)
            .await
            .expect("lookup failed");
        assert_eq!(result, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_treat_an_unknown_user_as_holding_nothing(gateway: InMemoryGateway) {
        assert!(!has_capability(&gateway, 404, Capability::Manager).await.unwrap());
        assert!(matches!(
            require_capability(&gateway, 404, Capability::Employee).await,
            Err(ApplicationError::Forbidden)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_propagate_other_storage_failures(gateway: InMemoryGateway) {
        let mut gateway = gateway;
        gateway.toggle_offline();
        assert!(matches!(
            has_capability(&gateway, EMPLOYEE_ID, Capability::Employee).await,
            Err(StorageError::Backend(_))
        ));
        assert!(matches!(
            require_capability(&gateway, EMPLOYEE_ID, Capability::Employee).await,
            Err(ApplicationError::Storage(StorageError::Backend(_)))
        ));
    }
}
