//! Schema migrations and demo seeding run once at startup.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_async::RunQueryDsl;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::models::{NewShipmentRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{shipments, users};
use crate::outbound::demo_data::{demo_shipments, demo_users};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while preparing the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },
    #[error("failed to apply migrations: {message}")]
    Migrate { message: String },
    #[error("failed to seed demo data: {message}")]
    Seed { message: String },
}

/// Apply pending migrations on a dedicated blocking connection.
pub async fn run_migrations(database_url: &str) -> Result<(), BootstrapError> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<usize, BootstrapError> {
        let mut conn =
            PgConnection::establish(&database_url).map_err(|err| BootstrapError::Connect {
                message: err.to_string(),
            })?;
        let versions =
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|err| BootstrapError::Migrate {
                    message: err.to_string(),
                })?;
        Ok(versions.len())
    })
    .await
    .map_err(|err| BootstrapError::Migrate {
        message: format!("migration task failed: {err}"),
    })??;

    info!(applied, "database migrations complete");
    Ok(())
}

/// Insert the demo users and shipments, leaving existing rows untouched.
pub async fn seed_demo_data(pool: &DbPool) -> Result<(), BootstrapError> {
    let seed_error = |message: String| BootstrapError::Seed { message };
    let mut conn = pool.get().await.map_err(|err| seed_error(err.to_string()))?;

    let users = demo_users();
    let user_rows: Vec<NewUserRow<'_>> = users
        .iter()
        .map(|user| NewUserRow {
            id: user.id().get(),
            name: user.name(),
            email: user.email(),
            role: user.role(),
            profile_message: user.profile_message(),
        })
        .collect();
    let shipments = demo_shipments();
    let shipment_rows: Vec<NewShipmentRow<'_>> = shipments
        .iter()
        .map(|shipment| NewShipmentRow {
            id: shipment.id().get(),
            tracking_number: shipment.tracking_number(),
            sender: shipment.sender(),
            receiver: shipment.receiver(),
            status: shipment.status().as_str(),
        })
        .collect();

    let inserted_users = diesel::insert_into(users::table)
        .values(&user_rows)
        .on_conflict_do_nothing()
        .execute(&mut conn)
        .await
        .map_err(|err| seed_error(err.to_string()))?;
    let inserted_shipments = diesel::insert_into(shipments::table)
        .values(&shipment_rows)
        .on_conflict_do_nothing()
        .execute(&mut conn)
        .await
        .map_err(|err| seed_error(err.to_string()))?;

    info!(inserted_users, inserted_shipments, "demo data seeded");
    Ok(())
}
