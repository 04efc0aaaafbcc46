//! List reservations against a running backend
//!
//! ```bash
//! MESA_API_BASE_URL=http://127.0.0.1:8000/api cargo run -p mesa-client --example list_reservations
//! ```

use mesa_client::{ClientConfig, MesaClient, NotificationQueue, ResourceRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    mesa_client::logger::init_logger("info,mesa_client=debug", false)?;

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting");

    let client = MesaClient::new(config)?;
    let notifications =
        NotificationQueue::with_tokio().ok_or_else(|| anyhow::anyhow!("no tokio runtime"))?;

    match client.reservations().get_all().await {
        Ok(reservations) => {
            for r in &reservations {
                tracing::info!(
                    id = ?r.id,
                    date = %r.date,
                    time = %r.time,
                    people = r.number_of_people,
                    table = %r.table_label(),
                    customer = r.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("-"),
                    "Reservation"
                );
            }
            notifications.success(format!("Loaded {} reservations", reservations.len()));
        }
        Err(e) => {
            notifications.report_error(&e);
        }
    }

    for n in notifications.list() {
        tracing::info!(kind = %n.kind, message = %n.message, "Notification");
    }
    Ok(())
}
