use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The store connection is constructed once at process start and threaded
/// into handlers by explicit injection, so tests can substitute a mock
/// connection.
#[derive(Debug)]
pub struct AppState {
    /// Database connection shared by all request handlers
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
