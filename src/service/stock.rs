use sea_orm::DatabaseConnection;

use crate::{
    data::stock::{StockRepository, StockUpsert},
    error::{stock::StockError, Error},
    market::{MarketDataClient, StockQuote},
};

/// Cap on stored rows returned by a search before the provider is consulted.
const SEARCH_LIMIT: u64 = 10;

pub struct StockService<'a> {
    db: &'a DatabaseConnection,
    market: &'a MarketDataClient,
}

impl<'a> StockService<'a> {
    pub fn new(db: &'a DatabaseConnection, market: &'a MarketDataClient) -> Self {
        Self { db, market }
    }

    /// Searches stored stocks first, asking the provider only when nothing
    /// matches locally. Provider hits are reconciled into storage so the next
    /// search is served locally. Any failure degrades to an empty result
    /// rather than failing the request.
    pub async fn search(&self, query: &str) -> Result<Vec<entity::stock::Model>, Error> {
        match self.search_local_then_provider(query).await {
            Ok(stocks) => Ok(stocks),
            Err(err) => {
                tracing::warn!(query = %query, "stock search failed: {}", err);

                Ok(Vec::new())
            }
        }
    }

    async fn search_local_then_provider(
        &self,
        query: &str,
    ) -> Result<Vec<entity::stock::Model>, Error> {
        let repository = StockRepository::new(self.db);

        let stored = repository.search_stored(query, SEARCH_LIMIT).await?;
        if !stored.is_empty() {
            return Ok(stored);
        }

        let mut stocks = Vec::new();
        for quote in self.market.search(query).await? {
            let stock = repository
                .upsert_merge(StockUpsert {
                    symbol: quote.symbol.to_uppercase(),
                    name: quote.long_name.or(quote.short_name),
                    exchange: quote.exchange,
                    ..Default::default()
                })
                .await?;
            stocks.push(stock);
        }

        Ok(stocks)
    }

    /// The stored details for a symbol, reconciling from the provider when
    /// the symbol is not cached yet. Any failure along the way surfaces as
    /// an unknown symbol.
    pub async fn get_details(&self, symbol: &str) -> Result<entity::stock::Model, Error> {
        let symbol = symbol.to_uppercase();

        match self.lookup(&symbol).await {
            Ok(stock) => Ok(stock),
            Err(err) => {
                tracing::debug!(symbol = %symbol, "stock lookup failed: {}", err);

                Err(StockError::NotFound(symbol).into())
            }
        }
    }

    async fn lookup(&self, symbol: &str) -> Result<entity::stock::Model, Error> {
        let repository = StockRepository::new(self.db);

        if let Some(stock) = repository.get_by_symbol(symbol).await? {
            return Ok(stock);
        }

        self.reconcile(symbol).await
    }

    /// The stored stock for a symbol, reconciling from the provider when it
    /// is not stored yet. When the provider cannot help either, a bare record
    /// carrying just the symbol is created so callers still get a row.
    pub async fn get_or_create(&self, symbol: &str) -> Result<entity::stock::Model, Error> {
        let symbol = symbol.to_uppercase();
        let repository = StockRepository::new(self.db);

        if let Some(stock) = repository.get_by_symbol(&symbol).await? {
            return Ok(stock);
        }

        match self.reconcile(&symbol).await {
            Ok(stock) => Ok(stock),
            Err(err) => {
                tracing::warn!(
                    symbol = %symbol,
                    "creating bare stock record, provider lookup failed: {}",
                    err
                );

                Ok(repository
                    .upsert_merge(StockUpsert {
                        symbol,
                        ..Default::default()
                    })
                    .await?)
            }
        }
    }

    async fn reconcile(&self, symbol: &str) -> Result<entity::stock::Model, Error> {
        let quote = self
            .market
            .quote(symbol)
            .await?
            .ok_or_else(|| StockError::NotFound(symbol.to_string()))?;

        let repository = StockRepository::new(self.db);
        let stock = repository.upsert_merge(upsert_from_quote(symbol, quote)).await?;

        Ok(stock)
    }
}

fn upsert_from_quote(symbol: &str, quote: StockQuote) -> StockUpsert {
    StockUpsert {
        symbol: symbol.to_string(),
        name: quote.long_name.or(quote.short_name),
        exchange: quote.exchange.or(quote.full_exchange_name),
        sector: quote.sector,
        industry: quote.industry,
        website: quote.website,
        description: quote.long_business_summary,
        logo: None,
    }
}
