// Demo dataset for running without a database.

use anyhow::{Context, Result};

use crate::modules::identity::core::capabilities::Capabilities;
use crate::modules::identity::core::password::PasswordHashing;
use crate::shared::infrastructure::gateway::in_memory::InMemoryGateway;
use crate::shared::infrastructure::gateway::{Gateway, NewUserRecord};

const DEMO_USERS: [(&str, &str, &str, Capabilities); 3] = [
    ("employee1", "pass_employee1", "Employee One", Capabilities::EMPLOYEE),
    ("manager1", "pass_manager1", "Manager One", Capabilities::MANAGER),
    ("employee2", "pass_employee2", "Employee Two", Capabilities::EMPLOYEE),
];

const DEMO_REQUESTS: [(&str, &str, &str); 2] = [
    ("2024-01-01", "2024-01-07", "2024-01-01 12:00:00"),
    ("2024-02-01", "2024-02-07", "2024-02-01 12:00:00"),
];

/// Users get ids 1..=3 in `DEMO_USERS` order; both requests belong to the
/// manager (id 2).
pub async fn seed_demo_data<G>(gateway: &G, hashing: &PasswordHashing) -> Result<()>
where
    G: Gateway + ?Sized,
{
    let mut manager_id = None;
    for (login_id, password, name, capabilities) in DEMO_USERS {
        let password_hash = hashing
            .hash(password)
            .map_err(|e| anyhow::anyhow!("failed to hash demo password: {e}"))?;
        let id = gateway
            .create_user(NewUserRecord {
                login_id: login_id.to_string(),
                password_hash,
                name: name.to_string(),
                role: capabilities.bits(),
            })
            .await
            .with_context(|| format!("failed to seed user {login_id}"))?;
        if capabilities == Capabilities::MANAGER {
            manager_id = Some(id);
        }
    }
    let manager_id = manager_id.context("demo data has no manager")?;
    for (start_date, end_date, deadline) in DEMO_REQUESTS {
        gateway
            .create_request(manager_id, start_date, end_date, deadline)
            .await
            .context("failed to seed request")?;
    }
    tracing::info!(
        users = DEMO_USERS.len(),
        requests = DEMO_REQUESTS.len(),
        "demo data seeded"
    );
    Ok(())
}

pub async fn demo_gateway(hashing: &PasswordHashing) -> Result<InMemoryGateway> {
    let gateway = InMemoryGateway::new();
    seed_demo_data(&gateway, hashing).await?;
    Ok(gateway)
}
