mod dashboard;

pub use dashboard::{
    ChartSeries, CustomerKpi, DashboardResponse, Insight, ProductKpi, RevenueKpi, SalesKpi,
};
