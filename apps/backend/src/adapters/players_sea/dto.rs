/// Field values written by a guarded player update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub name: String,
    pub credits: i64,
    pub lifetime_spins: i64,
}
