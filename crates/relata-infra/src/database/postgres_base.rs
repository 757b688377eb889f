use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait, PrimaryKeyTrait};

use relata_core::error::RepoError;

/// Generic PostgreSQL store implementation - shared plumbing for the
/// entity-specific stores.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i64>,
{
    /// Fetch a single row by its integer primary key, converted into the
    /// domain type.
    pub(crate) async fn fetch_by_id<T>(&self, id: i64) -> Result<Option<T>, RepoError>
    where
        T: From<E::Model>,
    {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

/// Map SeaORM errors onto the core store taxonomy.
///
/// Decode failures (e.g. a corrupt `post_ids` column) become `Data` so the
/// corruption is surfaced rather than hidden; unique violations become
/// `Constraint`; a primary-key update that matched no row becomes
/// `NotFound`.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::Json(msg) | DbErr::Type(msg) => RepoError::Data(msg),
        DbErr::TryIntoErr { source, .. } => RepoError::Data(source.to_string()),
        DbErr::RecordNotUpdated => RepoError::NotFound,
        other => {
            let msg = other.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(msg)
            }
        }
    }
}
