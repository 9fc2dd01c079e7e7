use sea_orm::entity::prelude::*;

/// One row per player account in the wheel game.
///
/// Carries `secret_token`, so there are no serde derives here; the only
/// shape ever serialized into a response is the sanitized
/// `services::players::PlayerView`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "player_id")]
    pub id: i64,
    pub name: String,
    pub credits: i64,
    pub lifetime_spins: i64,
    /// Shared secret proving the caller may mutate this row.
    pub secret_token: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
