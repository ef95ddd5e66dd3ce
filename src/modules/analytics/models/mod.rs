mod analytics;

pub use analytics::{
    AnalyticsResponse, Forecast, ForecastSeries, PeakHours, PeakPeriod, TopCustomer,
};
