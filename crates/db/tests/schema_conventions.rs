use sqlx::PgPool;

/// Ids are client-generated strings, so every `id` column must be text.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_text(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 4);
    for (table, data_type) in &rows {
        assert_eq!(data_type, "text", "Table {table}.id should be text");
    }
}

/// Mutable or user-owned tables carry created_at/updated_at as timestamptz.
/// `ping_results` is append-only and only has its probe timestamp.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owned_tables_have_timestamps(pool: PgPool) {
    for table in ["users", "monitors", "status_pages"] {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Unique constraints must be named `uq_*` so the API maps them to 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let names: Vec<(String,)> = sqlx::query_as(
        "SELECT constraint_name
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type = 'UNIQUE'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!names.is_empty());
    for (name,) in &names {
        assert!(name.starts_with("uq_"), "constraint {name} should start with uq_");
    }
}
