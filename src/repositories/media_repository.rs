use sea_orm::*;

use crate::entities::{media_file, media_file::Entity as MediaFile};

pub struct MediaRepository;

impl MediaRepository {
    pub async fn add(
        db: &DatabaseConnection,
        user_name: &str,
        file_name: &str,
    ) -> Result<i32, DbErr> {
        tracing::debug!(user_name, file_name, "inserting media file record");
        let saved = media_file::ActiveModel {
            id: NotSet,
            file_name: Set(file_name.to_owned()),
            user_name: Set(user_name.to_owned()),
        }
        .insert(db)
        .await?;
        Ok(saved.id)
    }

    pub async fn total(db: &DatabaseConnection) -> Result<u64, DbErr> {
        MediaFile::find().count(db).await
    }

    /// Batch name lookup. Rows come back ordered by media id ascending;
    /// unknown ids are simply skipped.
    pub async fn file_names_by_ids(
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<Vec<String>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = MediaFile::find()
            .filter(media_file::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(media_file::Column::Id)
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|m| m.file_name).collect())
    }

    /// Delete records scoped to the owner; ids not owned by `user_name` are
    /// silently left alone. Returns the removed file names so the caller can
    /// clean up the filesystem.
    pub async fn bulk_delete(
        db: &DatabaseConnection,
        user_name: &str,
        ids: &[i32],
    ) -> Result<Vec<String>, DbErr> {
        tracing::debug!(user_name, ?ids, "bulk deleting media file records");
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let owned = MediaFile::find()
            .filter(media_file::Column::UserName.eq(user_name))
            .filter(media_file::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;
        if owned.is_empty() {
            return Ok(Vec::new());
        }
        MediaFile::delete_many()
            .filter(media_file::Column::UserName.eq(user_name))
            .filter(media_file::Column::Id.is_in(ids.iter().copied()))
            .exec(db)
            .await?;
        Ok(owned.into_iter().map(|m| m.file_name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn file_names_lookup_with_no_ids_skips_the_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        assert!(MediaRepository::file_names_by_ids(&db, &[])
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn bulk_delete_is_a_noop_for_foreign_ids() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<media_file::Model>::new()])
            .into_connection();

        let deleted = MediaRepository::bulk_delete(&db, "Alex", &[1, 2]).await.unwrap();
        assert!(deleted.is_empty());
    }

    #[tokio::test]
    async fn bulk_delete_returns_the_removed_names() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                media_file::Model {
                    id: 1,
                    file_name: "a.png".to_owned(),
                    user_name: "Alex".to_owned(),
                },
                media_file::Model {
                    id: 2,
                    file_name: "b.jpg".to_owned(),
                    user_name: "Alex".to_owned(),
                },
            ]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        assert_eq!(
            MediaRepository::bulk_delete(&db, "Alex", &[1, 2]).await.unwrap(),
            vec!["a.png".to_owned(), "b.jpg".to_owned()]
        );
    }

    #[tokio::test]
    async fn total_counts_media_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([(
                "num_items",
                sea_orm::Value::from(5i64),
            )])]])
            .into_connection();

        assert_eq!(MediaRepository::total(&db).await.unwrap(), 5);
    }
}
