use business::domain::errors::RepositoryError;

/// Unique violations become `Duplicated` so the service can report a
/// duplicate entry; everything else is an opaque database failure.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    tracing::error!(error = %err, "database operation failed");
    RepositoryError::DatabaseError
}
