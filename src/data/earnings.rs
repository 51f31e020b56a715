use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// One provider report row normalized for storage.
#[derive(Debug, Clone)]
pub struct EarningsReportUpsert {
    pub stock_id: i32,
    pub earnings_date: NaiveDate,
    pub earnings_time: Option<String>,
    pub eps_estimate: Option<f64>,
    pub eps_actual: Option<f64>,
    pub revenue_estimate: Option<f64>,
    pub revenue_actual: Option<f64>,
    pub fiscal_quarter: Option<String>,
    pub fiscal_year: Option<String>,
}

pub struct EarningsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EarningsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the report or refreshes the existing row keyed by
    /// (stock, earnings date) with the provider's latest figures.
    pub async fn upsert_report(
        &self,
        report: EarningsReportUpsert,
    ) -> Result<entity::earnings_event::Model, DbErr> {
        use entity::earnings_event::Column;

        let now = Utc::now().naive_utc();

        let model = entity::earnings_event::ActiveModel {
            stock_id: ActiveValue::Set(report.stock_id),
            earnings_date: ActiveValue::Set(report.earnings_date),
            earnings_time: ActiveValue::Set(report.earnings_time),
            eps_estimate: ActiveValue::Set(report.eps_estimate),
            eps_actual: ActiveValue::Set(report.eps_actual),
            revenue_estimate: ActiveValue::Set(report.revenue_estimate),
            revenue_actual: ActiveValue::Set(report.revenue_actual),
            fiscal_quarter: ActiveValue::Set(report.fiscal_quarter),
            fiscal_year: ActiveValue::Set(report.fiscal_year),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let models = entity::prelude::EarningsEvent::insert_many([model])
            .on_conflict(
                OnConflict::columns([Column::StockId, Column::EarningsDate])
                    .update_columns([
                        Column::EarningsTime,
                        Column::EpsEstimate,
                        Column::EpsActual,
                        Column::RevenueEstimate,
                        Column::RevenueActual,
                        Column::FiscalQuarter,
                        Column::FiscalYear,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        models.into_iter().next().ok_or(DbErr::RecordNotInserted)
    }

    pub async fn get_by_stock_and_date(
        &self,
        stock_id: i32,
        earnings_date: NaiveDate,
    ) -> Result<Option<entity::earnings_event::Model>, DbErr> {
        entity::prelude::EarningsEvent::find()
            .filter(entity::earnings_event::Column::StockId.eq(stock_id))
            .filter(entity::earnings_event::Column::EarningsDate.eq(earnings_date))
            .one(self.db)
            .await
    }

    /// All events between two dates inclusive, each paired with its stock,
    /// ordered by report date. A symbol narrows the result to that stock,
    /// matched case-insensitively.
    pub async fn find_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        symbol: Option<&str>,
    ) -> Result<
        Vec<(
            entity::earnings_event::Model,
            Option<entity::stock::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::EarningsEvent::find()
            .find_also_related(entity::prelude::Stock)
            .filter(entity::earnings_event::Column::EarningsDate.between(start, end));

        if let Some(symbol) = symbol {
            query = query.filter(entity::stock::Column::Symbol.eq(symbol.to_uppercase()));
        }

        query
            .order_by_asc(entity::earnings_event::Column::EarningsDate)
            .all(self.db)
            .await
    }
}
