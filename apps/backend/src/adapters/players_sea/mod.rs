//! SeaORM adapter for the players table.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerUpdate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

/// Conditional write requiring both identity and secret match at write
/// time. Returns the number of rows changed (0 or 1); callers decide what
/// a zero means.
pub async fn update_guarded<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    update: PlayerUpdate,
    expected_token: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::update_many()
        .col_expr(players::Column::Name, Expr::value(update.name))
        .col_expr(players::Column::Credits, Expr::value(update.credits))
        .col_expr(
            players::Column::LifetimeSpins,
            Expr::value(update.lifetime_spins),
        )
        .filter(players::Column::Id.eq(player_id))
        .filter(players::Column::SecretToken.eq(expected_token))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
