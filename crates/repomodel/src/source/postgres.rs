//! PostgreSQL metadata source.
//!
//! Reads tables from `information_schema` and foreign keys from
//! `pg_catalog.pg_constraint` over a single connection, held for the whole
//! run and released by [`MetadataSource::close`].

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, Config as PgConfig, NoTls};
use tracing::{debug, info, warn};

use crate::config::SourceConfig;
use crate::core::{DbColumn, DbForeignKey, DbForeignKeyColumn, DbTable, MetadataSource, SchemaScope};
use crate::error::{RepoError, Result};

use super::pg_types;
use super::tls::SslMode;

type ConnectionTask = JoinHandle<std::result::Result<(), tokio_postgres::Error>>;

/// Metadata source backed by one PostgreSQL connection.
pub struct PostgresSource {
    client: Mutex<Option<Client>>,
    connection: Mutex<Option<ConnectionTask>>,
}

impl PostgresSource {
    /// Open the connection described by `config`.
    pub async fn connect(config: &SourceConfig) -> Result<Self> {
        let mut pg_config = PgConfig::new();
        pg_config.host(&config.host);
        pg_config.port(config.port);
        pg_config.dbname(&config.database);
        pg_config.user(&config.user);
        pg_config.password(&config.password);
        pg_config.application_name("repomodel");

        let target = format!("{}:{}/{}", config.host, config.port, config.database);
        let context = format!("connecting to PostgreSQL at {}", target);

        let ssl_mode = SslMode::parse(&config.ssl_mode)?;
        let (client, connection) = match ssl_mode.connector()? {
            None => {
                warn!("PostgreSQL TLS is disabled. Credentials will be transmitted in plaintext.");
                let (client, connection) = pg_config
                    .connect(NoTls)
                    .await
                    .map_err(|e| RepoError::connection(e, context.clone()))?;
                (client, tokio::spawn(connection))
            }
            Some(tls) => {
                let (client, connection) = pg_config
                    .connect(tls)
                    .await
                    .map_err(|e| RepoError::connection(e, context.clone()))?;
                (client, tokio::spawn(connection))
            }
        };

        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| RepoError::connection(e, "testing PostgreSQL connection"))?;

        info!("Connected to PostgreSQL: {}", target);

        Ok(Self {
            client: Mutex::new(Some(client)),
            connection: Mutex::new(Some(connection)),
        })
    }

    async fn load_tables(&self, client: &Client, scope: &SchemaScope) -> Result<Vec<DbTable>> {
        let query = r#"
            SELECT
                table_catalog::text,
                table_schema::text,
                table_name::text,
                table_type::text
            FROM information_schema.tables
            WHERE ($1::text IS NULL OR table_schema = $1::text)
              AND table_name LIKE $2::text
              AND table_schema NOT IN ('pg_catalog', 'information_schema')
            ORDER BY table_schema, table_name
        "#;

        let rows = client
            .query(query, &[&scope.schema, &scope.table_pattern])
            .await?;

        let tables = rows
            .iter()
            .map(|row| DbTable {
                catalog: row.get(0),
                schema: row.get(1),
                name: row.get(2),
                table_type: pg_types::table_type(row.get(3)).to_string(),
                ..Default::default()
            })
            .filter(|table| scope.accepts(table))
            .collect();

        Ok(tables)
    }

    async fn load_columns(&self, client: &Client, table: &mut DbTable) -> Result<()> {
        let query = r#"
            SELECT
                c.column_name::text,
                c.udt_name::text,
                c.character_maximum_length::int4,
                c.is_nullable = 'NO',
                c.column_default::text,
                c.ordinal_position::int4,
                (SELECT pg_catalog.col_description(a.attrelid, a.attnum)
                   FROM pg_catalog.pg_attribute a
                   JOIN pg_catalog.pg_class cl ON cl.oid = a.attrelid
                   JOIN pg_catalog.pg_namespace n ON n.oid = cl.relnamespace
                  WHERE n.nspname = c.table_schema
                    AND cl.relname = c.table_name
                    AND a.attname = c.column_name),
                EXISTS (
                    SELECT 1
                    FROM information_schema.table_constraints tc
                    JOIN information_schema.key_column_usage k
                      ON k.constraint_schema = tc.constraint_schema
                     AND k.constraint_name = tc.constraint_name
                     AND k.table_name = tc.table_name
                    WHERE tc.constraint_type = 'PRIMARY KEY'
                      AND tc.table_schema = c.table_schema
                      AND tc.table_name = c.table_name
                      AND k.column_name = c.column_name
                ),
                (SELECT COUNT(*)
                   FROM information_schema.table_constraints tc
                   JOIN information_schema.key_column_usage k
                     ON k.constraint_schema = tc.constraint_schema
                    AND k.constraint_name = tc.constraint_name
                    AND k.table_name = tc.table_name
                  WHERE tc.constraint_type = 'FOREIGN KEY'
                    AND tc.table_schema = c.table_schema
                    AND tc.table_name = c.table_name
                    AND k.column_name = c.column_name)::int4,
                (c.is_identity = 'YES'
                 OR COALESCE(c.column_default, '') LIKE 'nextval(%'),
                c.numeric_precision::int4,
                c.numeric_precision_radix::int4,
                c.datetime_precision::int4
            FROM information_schema.columns c
            WHERE c.table_schema = $1::text AND c.table_name = $2::text
            ORDER BY c.ordinal_position
        "#;

        let rows = client.query(query, &[&table.schema, &table.name]).await?;

        for row in rows {
            let type_name: String = row.get(1);
            let size = pg_types::column_size(
                &type_name,
                row.get(2),
                row.get(10),
                row.get(11),
                row.get(12),
            );
            table.columns.push(DbColumn {
                name: row.get(0),
                type_code: pg_types::jdbc_type_code(&type_name),
                type_name,
                size,
                not_null: row.get(3),
                default_value: row.get(4),
                ordinal_position: row.get(5),
                comment: row.get(6),
                in_primary_key: row.get(7),
                used_in_foreign_key: row.get(8),
                auto_increment: row.get(9),
            });
        }

        debug!("Loaded {} columns for {}", table.columns.len(), table.full_name());
        Ok(())
    }

    async fn load_foreign_keys(&self, client: &Client, table: &mut DbTable) -> Result<()> {
        let query = r#"
            SELECT
                con.conname::text,
                k.ord::int4,
                src.relname::text,
                sa.attname::text,
                tgt.relname::text,
                ra.attname::text,
                con.confupdtype::text,
                con.confdeltype::text,
                con.condeferrable,
                con.condeferred
            FROM pg_catalog.pg_constraint con
            JOIN pg_catalog.pg_class src ON src.oid = con.conrelid
            JOIN pg_catalog.pg_namespace ns ON ns.oid = src.relnamespace
            JOIN pg_catalog.pg_class tgt ON tgt.oid = con.confrelid
            CROSS JOIN LATERAL unnest(con.conkey, con.confkey)
                WITH ORDINALITY AS k(attnum, refnum, ord)
            JOIN pg_catalog.pg_attribute sa
              ON sa.attrelid = con.conrelid AND sa.attnum = k.attnum
            JOIN pg_catalog.pg_attribute ra
              ON ra.attrelid = con.confrelid AND ra.attnum = k.refnum
            WHERE con.contype = 'f'
              AND ns.nspname = $1::text
              AND src.relname = $2::text
            ORDER BY con.conname, k.ord
        "#;

        let rows = client.query(query, &[&table.schema, &table.name]).await?;

        let key_columns = rows.iter().map(|row| {
            let update: String = row.get(6);
            let delete: String = row.get(7);
            (
                row.get::<_, String>(0),
                DbForeignKeyColumn {
                    sequence: row.get(1),
                    fk_table: row.get(2),
                    fk_column: row.get(3),
                    pk_table: row.get(4),
                    pk_column: row.get(5),
                    update_rule: pg_types::rule_code(&update),
                    delete_rule: pg_types::rule_code(&delete),
                    deferrability: pg_types::deferrability_code(row.get(8), row.get(9)),
                },
            )
        });
        table.foreign_keys = group_foreign_keys(key_columns);

        debug!(
            "Loaded {} foreign keys for {}",
            table.foreign_keys.len(),
            table.full_name()
        );
        Ok(())
    }
}

/// Group consecutive key-column rows into foreign keys, keeping row order.
fn group_foreign_keys(
    rows: impl IntoIterator<Item = (String, DbForeignKeyColumn)>,
) -> Vec<DbForeignKey> {
    let mut keys: Vec<DbForeignKey> = Vec::new();
    for (name, column) in rows {
        match keys.last_mut() {
            Some(last) if last.name == name => last.columns.push(column),
            _ => keys.push(DbForeignKey {
                name,
                columns: vec![column],
            }),
        }
    }
    keys
}

#[async_trait]
impl MetadataSource for PostgresSource {
    fn db_type(&self) -> &str {
        "postgres"
    }

    async fn extract_tables(&self, scope: &SchemaScope) -> Result<Vec<DbTable>> {
        let guard = self.client.lock().await;
        let client = guard
            .as_ref()
            .ok_or_else(|| RepoError::connection("connection already closed", "reading metadata"))?;

        let mut tables = self.load_tables(client, scope).await?;
        for table in &mut tables {
            self.load_columns(client, table).await?;
            self.load_foreign_keys(client, table).await?;
        }

        info!("Extracted metadata for {} tables", tables.len());
        Ok(tables)
    }

    async fn close(&self) -> Result<()> {
        // Dropping the client lets the connection task finish.
        drop(self.client.lock().await.take());

        let task = self.connection.lock().await.take();
        if let Some(task) = task {
            match task.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => return Err(RepoError::connection(e, "closing PostgreSQL connection")),
                Err(e) => return Err(RepoError::connection(e, "joining PostgreSQL connection task")),
            }
            info!("PostgreSQL connection closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_column(sequence: i32, column: &str) -> DbForeignKeyColumn {
        DbForeignKeyColumn {
            sequence,
            fk_table: "ORDERS".to_string(),
            fk_column: column.to_string(),
            pk_table: "CUSTOMER".to_string(),
            pk_column: column.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_group_foreign_keys_keeps_row_order() {
        let keys = group_foreign_keys(vec![
            ("FK_A".to_string(), key_column(1, "REGION")),
            ("FK_A".to_string(), key_column(2, "CUST_ID")),
            ("FK_B".to_string(), key_column(1, "STORE_ID")),
        ]);

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].name, "FK_A");
        let columns: Vec<&str> = keys[0].columns.iter().map(|c| c.fk_column.as_str()).collect();
        assert_eq!(columns, vec!["REGION", "CUST_ID"]);
        assert_eq!(keys[1].columns.len(), 1);
    }

    #[test]
    fn test_group_foreign_keys_empty() {
        assert!(group_foreign_keys(Vec::new()).is_empty());
    }
}
