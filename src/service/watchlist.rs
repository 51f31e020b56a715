use sea_orm::DatabaseConnection;

use crate::{
    data::{stock::StockRepository, watchlist::WatchlistRepository},
    error::{watchlist::WatchlistError, Error},
    market::MarketDataClient,
    model::watchlist::{CreateWatchlistDto, UpdateWatchlistDto, WatchlistDto},
    service::stock::StockService,
};

pub struct WatchlistService<'a> {
    db: &'a DatabaseConnection,
    market: &'a MarketDataClient,
}

impl<'a> WatchlistService<'a> {
    pub fn new(db: &'a DatabaseConnection, market: &'a MarketDataClient) -> Self {
        Self { db, market }
    }

    pub async fn create(
        &self,
        user_id: i32,
        dto: CreateWatchlistDto,
    ) -> Result<WatchlistDto, Error> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(Error::Validation("watchlist name must not be empty".to_string()));
        }

        let repository = WatchlistRepository::new(self.db);
        let watchlist = repository.create(user_id, name, dto.description).await?;

        Ok(WatchlistDto::from_watchlist(watchlist, Vec::new()))
    }

    pub async fn get_all(&self, user_id: i32) -> Result<Vec<WatchlistDto>, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlists = repository.get_all_for_user(user_id).await?;

        let mut dtos = Vec::with_capacity(watchlists.len());
        for watchlist in watchlists {
            let stocks = repository.stocks(watchlist.id).await?;
            dtos.push(WatchlistDto::from_watchlist(watchlist, stocks));
        }

        Ok(dtos)
    }

    pub async fn get_one(&self, id: i32, user_id: i32) -> Result<WatchlistDto, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;
        let stocks = repository.stocks(watchlist.id).await?;

        Ok(WatchlistDto::from_watchlist(watchlist, stocks))
    }

    /// The stocks on one of the user's watchlists.
    pub async fn get_stocks(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Vec<entity::stock::Model>, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;

        Ok(repository.stocks(watchlist.id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        dto: UpdateWatchlistDto,
    ) -> Result<WatchlistDto, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;

        let updated = repository.update(watchlist, dto.name, dto.description).await?;
        let stocks = repository.stocks(updated.id).await?;

        Ok(WatchlistDto::from_watchlist(updated, stocks))
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;

        repository.delete(watchlist.id).await?;

        Ok(())
    }

    /// Adds a stock to a watchlist by symbol, creating the stock record if
    /// needed. Adding a symbol that is already on the list is a no-op with a
    /// distinct message rather than an error.
    pub async fn add_stock(&self, id: i32, user_id: i32, symbol: &str) -> Result<String, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;

        let stock_service = StockService::new(self.db, self.market);
        let stock = stock_service.get_or_create(symbol).await?;

        if repository.get_entry(watchlist.id, stock.id).await?.is_some() {
            return Ok("Stock already in watchlist".to_string());
        }

        repository.add_entry(watchlist.id, stock.id).await?;

        Ok("Stock added to watchlist".to_string())
    }

    pub async fn remove_stock(
        &self,
        id: i32,
        user_id: i32,
        symbol: &str,
    ) -> Result<String, Error> {
        let repository = WatchlistRepository::new(self.db);

        let watchlist = repository
            .get_for_user(id, user_id)
            .await?
            .ok_or(WatchlistError::WatchlistNotFound(id))?;

        let stock_repository = StockRepository::new(self.db);
        let stock = stock_repository
            .get_by_symbol(&symbol.to_uppercase())
            .await?
            .ok_or_else(|| WatchlistError::StockNotInWatchlist(symbol.to_string()))?;

        let rows_affected = repository.remove_entry(watchlist.id, stock.id).await?;
        if rows_affected == 0 {
            return Err(WatchlistError::StockNotInWatchlist(symbol.to_string()).into());
        }

        Ok("Stock removed from watchlist".to_string())
    }
}
