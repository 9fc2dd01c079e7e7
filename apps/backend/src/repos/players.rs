//! Player repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::players_sea as players_adapter;
use crate::adapters::players_sea::PlayerUpdate;
use crate::entities::players;
use crate::errors::domain::DomainError;

/// A player row as observed by one request, plus the derived lifetime
/// average. Still carries the secret token; response shaping strips it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub id: i64,
    pub name: String,
    pub credits: i64,
    pub lifetime_spins: i64,
    pub secret_token: String,
    /// credits / lifetime_spins. `None` for a player who has never spun,
    /// where the quotient is undefined.
    pub lifetime_average: Option<f64>,
}

impl From<players::Model> for PlayerRecord {
    fn from(model: players::Model) -> Self {
        let lifetime_average = (model.lifetime_spins != 0)
            .then(|| model.credits as f64 / model.lifetime_spins as f64);

        Self {
            id: model.id,
            name: model.name,
            credits: model.credits,
            lifetime_spins: model.lifetime_spins,
            secret_token: model.secret_token,
            lifetime_average,
        }
    }
}

/// Parameterized point lookup by id.
///
/// # Returns
/// * `Ok(PlayerRecord)` - The full row including the secret token
/// * `Err(DomainError::NotFound)` - No row for this id
/// * `Err(DomainError::Store)` - Storage-layer failure
pub async fn fetch_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<PlayerRecord, DomainError> {
    let model = players_adapter::find_by_id(conn, player_id)
        .await?
        .ok_or(DomainError::NotFound { player_id })?;

    Ok(PlayerRecord::from(model))
}

/// Guarded write. Zero affected rows is a failed optimistic check and
/// surfaces as `UpdateRejected`, never as silent success.
pub async fn update_guarded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    update: PlayerUpdate,
    expected_token: &str,
) -> Result<(), DomainError> {
    let rows =
        players_adapter::update_guarded(conn, player_id, update, expected_token).await?;

    if rows == 0 {
        return Err(DomainError::UpdateRejected { player_id });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{fetch_by_id, update_guarded, PlayerRecord};
    use crate::adapters::players_sea::PlayerUpdate;
    use crate::entities::players;
    use crate::errors::domain::DomainError;

    fn row(credits: i64, lifetime_spins: i64) -> players::Model {
        players::Model {
            id: 1,
            name: "Ada".to_string(),
            credits,
            lifetime_spins,
            secret_token: "abc".to_string(),
        }
    }

    #[tokio::test]
    async fn fetch_computes_lifetime_average() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(100, 4)]])
            .into_connection();

        let record = fetch_by_id(&conn, 1).await.unwrap();
        assert_eq!(record.lifetime_average, Some(25.0));
        assert_eq!(record.secret_token, "abc");
    }

    #[tokio::test]
    async fn fetch_reports_undefined_average_as_none() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(100, 0)]])
            .into_connection();

        let record = fetch_by_id(&conn, 1).await.unwrap();
        assert_eq!(record.lifetime_average, None);
    }

    #[tokio::test]
    async fn fetch_missing_row_is_not_found() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<players::Model>::new()])
            .into_connection();

        let err = fetch_by_id(&conn, 999).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound { player_id: 999 });
    }

    #[tokio::test]
    async fn zero_affected_rows_is_update_rejected() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let update = PlayerUpdate {
            name: "Ada".to_string(),
            credits: 140,
            lifetime_spins: 5,
        };
        let err = update_guarded(&conn, 1, update, "abc").await.unwrap_err();
        assert_eq!(err, DomainError::UpdateRejected { player_id: 1 });
    }

    #[tokio::test]
    async fn one_affected_row_is_success() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let update = PlayerUpdate {
            name: "Ada".to_string(),
            credits: 140,
            lifetime_spins: 5,
        };
        update_guarded(&conn, 1, update, "abc").await.unwrap();
    }

    #[test]
    fn record_from_model_keeps_all_fields() {
        let record = PlayerRecord::from(row(100, 4));
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Ada");
        assert_eq!(record.credits, 100);
        assert_eq!(record.lifetime_spins, 4);
    }
}
