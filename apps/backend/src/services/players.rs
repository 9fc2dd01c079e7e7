//! Spin transaction and sanitized player reads.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::adapters::players_sea::PlayerUpdate;
use crate::errors::domain::DomainError;
use crate::repos::players as players_repo;
use crate::repos::players::PlayerRecord;

/// Player state as exposed over the API: `PlayerRecord` minus the secret
/// token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: i64,
    pub name: String,
    pub credits: i64,
    pub lifetime_spins: i64,
    /// `null` for a player who has never spun.
    pub lifetime_average: Option<f64>,
}

impl From<PlayerRecord> for PlayerView {
    fn from(record: PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            credits: record.credits,
            lifetime_spins: record.lifetime_spins,
            lifetime_average: record.lifetime_average,
        }
    }
}

/// One wheel-spin wager as received from the client.
///
/// `bet` and `winnings` arrive as raw values so that both numeric and
/// string-encoded integers are accepted, whichever body encoding the
/// client used; everything else is rejected during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SpinRequest {
    pub bet: Value,
    pub winnings: Value,
    /// The presented secret token.
    pub hash: String,
}

/// Fetch a player and strip the secret token.
pub async fn read_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<PlayerView, DomainError> {
    let record = players_repo::fetch_by_id(conn, player_id).await?;
    Ok(record.into())
}

/// Apply one wheel-spin wager to a player.
///
/// Validation happens before any store access: `winnings` must be
/// integer-valued (negatives allowed), then `bet` must be integer-valued
/// and non-zero. A zero bet is rejected while zero and negative winnings
/// pass; negative bets also pass. The stored row is then fetched, the
/// presented token compared for exact equality, the new balance written
/// through the guarded update, and the row re-read so the response
/// reflects authoritative post-write state.
pub async fn spin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    request: SpinRequest,
) -> Result<PlayerView, DomainError> {
    let winnings = int_value(&request.winnings).ok_or_else(|| {
        DomainError::invalid_wager("invalid value for winnings: integer expected")
    })?;

    let bet = int_value(&request.bet)
        .filter(|bet| *bet != 0)
        .ok_or_else(|| {
            DomainError::invalid_wager("invalid value for bet: non-zero integer expected")
        })?;

    let player = players_repo::fetch_by_id(conn, player_id).await?;

    if request.hash != player.secret_token {
        return Err(DomainError::AuthenticationFailed { player_id });
    }

    let credits = player
        .credits
        .checked_add(winnings)
        .and_then(|total| total.checked_sub(bet))
        .ok_or_else(|| DomainError::invalid_wager("wager overflows the credit balance"))?;
    let lifetime_spins = player.lifetime_spins + 1;

    let update = PlayerUpdate {
        name: player.name,
        credits,
        lifetime_spins,
    };
    players_repo::update_guarded(conn, player_id, update, &request.hash).await?;

    info!(player_id, bet, winnings, credits, lifetime_spins, "spin applied");

    let refreshed = players_repo::fetch_by_id(conn, player_id).await?;
    Ok(refreshed.into())
}

/// Accepts integers however the body encoding delivered them: JSON numbers
/// (including integral floats) and decimal strings both count.
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{json, Value};

    use super::{int_value, spin, SpinRequest};
    use crate::errors::domain::DomainError;

    fn request(bet: Value, winnings: Value, hash: &str) -> SpinRequest {
        SpinRequest {
            bet,
            winnings,
            hash: hash.to_string(),
        }
    }

    /// A connection with nothing prepared: any statement would error, so
    /// reaching the store at all fails the test.
    fn unreachable_store() -> sea_orm::DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    #[test]
    fn int_value_accepts_numbers_and_decimal_strings() {
        assert_eq!(int_value(&json!(42)), Some(42));
        assert_eq!(int_value(&json!(-7)), Some(-7));
        assert_eq!(int_value(&json!("42")), Some(42));
        assert_eq!(int_value(&json!(" -7 ")), Some(-7));
        assert_eq!(int_value(&json!(12.0)), Some(12));
    }

    #[test]
    fn int_value_rejects_everything_else() {
        assert_eq!(int_value(&json!(12.5)), None);
        assert_eq!(int_value(&json!("12.5")), None);
        assert_eq!(int_value(&json!("abc")), None);
        assert_eq!(int_value(&json!(true)), None);
        assert_eq!(int_value(&json!(null)), None);
        assert_eq!(int_value(&json!([1])), None);
    }

    #[tokio::test]
    async fn non_integer_winnings_fail_before_any_store_access() {
        let conn = unreachable_store();
        let err = spin(&conn, 1, request(json!(10), json!("oops"), "abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidWager(ref d) if d.contains("winnings")));
        assert!(conn.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn zero_bet_is_rejected_even_with_valid_winnings() {
        let conn = unreachable_store();
        let err = spin(&conn, 1, request(json!(0), json!(50), "abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidWager(ref d) if d.contains("bet")));
        assert!(conn.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn winnings_are_validated_before_bet() {
        // Both fields invalid: the winnings failure must win.
        let conn = unreachable_store();
        let err = spin(&conn, 1, request(json!("bad"), json!("bad"), "abc"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidWager(ref d) if d.contains("winnings")));
    }

    #[tokio::test]
    async fn overflowing_wager_is_rejected_without_a_write() {
        // Validation passes, so the fetch runs; prepare one row for it but
        // no exec result, so an update attempt would error loudly.
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![crate::entities::players::Model {
                id: 1,
                name: "Ada".to_string(),
                credits: i64::MAX,
                lifetime_spins: 4,
                secret_token: "abc".to_string(),
            }]])
            .into_connection();

        let err = spin(&conn, 1, request(json!(-1), json!(1), "abc"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidWager(_)));

        // Exactly the fetch ran.
        assert_eq!(conn.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn negative_bets_and_winnings_are_permitted() {
        // 100 + (-10) - (-5) = 95
        let before = crate::entities::players::Model {
            id: 1,
            name: "Ada".to_string(),
            credits: 100,
            lifetime_spins: 4,
            secret_token: "abc".to_string(),
        };
        let after = crate::entities::players::Model {
            credits: 95,
            lifetime_spins: 5,
            ..before.clone()
        };
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before], vec![after]])
            .append_exec_results([sea_orm::MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let view = spin(&conn, 1, request(json!(-5), json!(-10), "abc"))
            .await
            .unwrap();
        assert_eq!(view.credits, 95);
        assert_eq!(view.lifetime_spins, 5);
    }

    #[tokio::test]
    async fn token_mismatch_fails_without_a_write() {
        let before = crate::entities::players::Model {
            id: 1,
            name: "Ada".to_string(),
            credits: 100,
            lifetime_spins: 4,
            secret_token: "abc".to_string(),
        };
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![before]])
            .into_connection();

        let err = spin(&conn, 1, request(json!(10), json!(50), "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::AuthenticationFailed { player_id: 1 });

        // Exactly the fetch ran; no update statement was issued.
        assert_eq!(conn.into_transaction_log().len(), 1);
    }
}
