pub mod http_sales_client;
pub mod local_sales_gateway;
pub mod sales_gateway;

pub use http_sales_client::HttpSalesClient;
pub use local_sales_gateway::LocalSalesGateway;
pub use sales_gateway::SalesGateway;
