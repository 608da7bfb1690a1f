use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Query execution error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Duplicate entry: {0}")]
    UniqueViolation(String),
}

impl DatabaseError {
    /// Maps a sqlx error, promoting Postgres unique violations (23505) to
    /// their own variant so the API layer can answer 409 instead of 500.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some("23505") {
                return DatabaseError::UniqueViolation(db_err.message().to_string());
            }
        }
        DatabaseError::QueryError(err)
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
