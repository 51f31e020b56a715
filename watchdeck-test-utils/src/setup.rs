use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server,
            db,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Unique index on earnings_event (stock_id, earnings_date); the report
/// upsert's conflict target, so schemas built from entities need it too.
pub fn earnings_event_unique_index() -> IndexCreateStatement {
    Index::create()
        .name("idx_earnings_event_stock_id_earnings_date")
        .table(entity::earnings_event::Entity)
        .col(entity::earnings_event::Column::StockId)
        .col(entity::earnings_event::Column::EarningsDate)
        .unique()
        .to_owned()
}

#[macro_export]
macro_rules! test_setup {
    () => {{
        TestSetup::new().await
    }};
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided, create the full schema
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Stock),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::EarningsEvent),
                schema.create_table_from_entity(entity::prelude::Watchlist),
                schema.create_table_from_entity(entity::prelude::WatchlistStock),
            ];
            setup.with_tables(stmts).await?;

            setup
                .with_indexes(vec![
                    $crate::setup::earnings_event_unique_index(),
                ])
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
