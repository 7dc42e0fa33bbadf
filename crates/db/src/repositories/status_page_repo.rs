//! Repository for the `status_pages` table.

use sqlx::PgPool;

use crate::error::{require, StoreResult};
use crate::models::status_page::{dedup_monitor_ids, CreateStatusPage, StatusPage};
use crate::{bounded, QUERY_TIMEOUT};

const ENTITY: &str = "StatusPage";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, slug, monitor_ids, created_at, updated_at";

/// Provides create and lookup operations for status pages.
pub struct StatusPageRepo;

impl StatusPageRepo {
    /// Insert a new status page under the caller-supplied `id`.
    ///
    /// Repeated monitor ids are collapsed, keeping first-seen order. A slug
    /// already used by the same owner violates `uq_status_pages_user_slug`.
    pub async fn create(
        pool: &PgPool,
        id: &str,
        input: &CreateStatusPage,
    ) -> StoreResult<StatusPage> {
        let query = format!(
            "INSERT INTO status_pages (id, user_id, name, slug, monitor_ids)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let monitor_ids = dedup_monitor_ids(&input.monitor_ids);
        let page = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, StatusPage>(&query)
                .bind(id)
                .bind(&input.user_id)
                .bind(&input.name)
                .bind(&input.slug)
                .bind(&monitor_ids)
                .fetch_one(pool),
        )
        .await?;
        tracing::debug!(status_page_id = %page.id, slug = %page.slug, "Status page created");
        Ok(page)
    }

    /// Find a status page by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> StoreResult<StatusPage> {
        let query = format!("SELECT {COLUMNS} FROM status_pages WHERE id = $1");
        let row = bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, StatusPage>(&query)
                .bind(id)
                .fetch_optional(pool),
        )
        .await?;
        require(row, ENTITY, id)
    }

    /// Find a status page by its owner and slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        user_id: &str,
        slug: &str,
    ) -> StoreResult<Option<StatusPage>> {
        let query =
            format!("SELECT {COLUMNS} FROM status_pages WHERE user_id = $1 AND slug = $2");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, StatusPage>(&query)
                .bind(user_id)
                .bind(slug)
                .fetch_optional(pool),
        )
        .await
    }

    /// List all status pages, oldest first.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<StatusPage>> {
        let query = format!("SELECT {COLUMNS} FROM status_pages ORDER BY created_at, id");
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, StatusPage>(&query).fetch_all(pool),
        )
        .await
    }

    /// List the status pages owned by one user, oldest first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> StoreResult<Vec<StatusPage>> {
        let query = format!(
            "SELECT {COLUMNS} FROM status_pages WHERE user_id = $1 ORDER BY created_at, id"
        );
        bounded(
            QUERY_TIMEOUT,
            sqlx::query_as::<_, StatusPage>(&query)
                .bind(user_id)
                .fetch_all(pool),
        )
        .await
    }
}
