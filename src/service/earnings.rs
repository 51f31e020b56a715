use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        earnings::{EarningsReportUpsert, EarningsRepository},
        stock::{StockRepository, StockUpsert},
    },
    error::Error,
    market::{EarningsItem, MarketDataClient},
    model::earnings::{EarningsCalendarDto, EarningsEventDto},
    util::week::week_bounds,
};

pub struct EarningsService<'a> {
    db: &'a DatabaseConnection,
    market: &'a MarketDataClient,
    refresh_threshold: usize,
}

impl<'a> EarningsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        market: &'a MarketDataClient,
        refresh_threshold: usize,
    ) -> Self {
        Self {
            db,
            market,
            refresh_threshold,
        }
    }

    /// The earnings calendar for the week `week_offset` weeks away from the
    /// current one, optionally narrowed to a single symbol.
    pub async fn get_calendar(
        &self,
        week_offset: i32,
        symbol: Option<&str>,
    ) -> Result<EarningsCalendarDto, Error> {
        self.calendar_for(Utc::now().date_naive(), week_offset, symbol)
            .await
    }

    /// Calendar for the week containing `today` shifted by `week_offset`.
    ///
    /// Stored events serve the request when the week is in the past and
    /// holds enough of them; current and future weeks always refresh from
    /// the provider, since upcoming schedules keep moving.
    pub async fn calendar_for(
        &self,
        today: NaiveDate,
        week_offset: i32,
        symbol: Option<&str>,
    ) -> Result<EarningsCalendarDto, Error> {
        let (start, end) = week_bounds(today, week_offset);
        let repository = EarningsRepository::new(self.db);

        let mut events = repository.find_between(start, end, symbol).await?;

        if events.len() < self.refresh_threshold || week_offset >= 0 {
            self.ingest(start, end).await?;
            events = repository.find_between(start, end, symbol).await?;
        }

        let mut earnings = Vec::new();
        let mut earnings_by_date: BTreeMap<String, Vec<EarningsEventDto>> = BTreeMap::new();
        for (event, stock) in events {
            let Some(stock) = stock else {
                continue;
            };

            let dto = EarningsEventDto::from_event(event, &stock);
            earnings_by_date
                .entry(dto.earnings_date.clone())
                .or_default()
                .push(dto.clone());
            earnings.push(dto);
        }

        Ok(EarningsCalendarDto {
            week_start: start.to_string(),
            week_end: end.to_string(),
            earnings_by_date,
            earnings,
            previous_week: (week_offset - 1).to_string(),
            current_week: week_offset.to_string(),
            next_week: (week_offset + 1).to_string(),
        })
    }

    /// Pulls the provider's reports for a date range into storage. Returns
    /// how many reports were stored. Rows the provider sends with dates we
    /// cannot parse are skipped; a storage failure aborts the rest of the
    /// batch.
    pub async fn ingest(&self, from: NaiveDate, to: NaiveDate) -> Result<usize, Error> {
        let items = self.market.earnings(from, to).await?;

        let mut stored = 0;
        for item in items {
            match self.store_report(&item).await {
                Ok(()) => stored += 1,
                Err(Error::Validation(reason)) => {
                    tracing::warn!(
                        symbol = %item.symbol,
                        "skipping earnings report: {}",
                        reason
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Ok(stored)
    }

    async fn store_report(&self, item: &EarningsItem) -> Result<(), Error> {
        let earnings_date = item
            .earnings_date
            .parse::<NaiveDate>()
            .map_err(|_| Error::Validation(format!("unparsable report date {:?}", item.earnings_date)))?;

        let stock_repository = StockRepository::new(self.db);
        let earnings_repository = EarningsRepository::new(self.db);

        let stock = stock_repository
            .upsert_merge(StockUpsert {
                symbol: item.symbol.clone(),
                name: item.company_short_name.clone(),
                ..Default::default()
            })
            .await?;

        let existing = earnings_repository
            .get_by_stock_and_date(stock.id, earnings_date)
            .await?;

        earnings_repository
            .upsert_report(EarningsReportUpsert {
                stock_id: stock.id,
                earnings_date,
                earnings_time: item.earnings_time.clone(),
                eps_estimate: item.eps_estimate,
                eps_actual: item.eps_actual,
                revenue_estimate: item.revenue_estimate,
                revenue_actual: item.revenue_actual,
                fiscal_quarter: item.fiscal_quarter.clone(),
                fiscal_year: item.fiscal_year.clone(),
            })
            .await?;

        // First sighting of this report also pins the stock's next date
        if existing.is_none() {
            if let Some(next) = earnings_date.and_hms_opt(0, 0, 0) {
                stock_repository.set_next_earnings_date(stock.id, next).await?;
            }
        }

        Ok(())
    }
}
