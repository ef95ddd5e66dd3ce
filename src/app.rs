// Service wiring shared by the binary and the HTTP tests

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;

use crate::config::{BillingConfig, Config};
use crate::core::Result;
use crate::middleware::{json_error_handler, query_error_handler};
use crate::modules::analytics::{self, AnalyticsService};
use crate::modules::billing::{BillingSession, LocalSalesGateway};
use crate::modules::dashboard::{self, DashboardService};
use crate::modules::health;
use crate::modules::inventory::{self, InMemoryLedgerRepository, InventoryService};
use crate::modules::notifications::repositories::seed_notifications;
use crate::modules::notifications::{
    self, InMemoryNotificationRepository, NotificationService,
};
use crate::modules::products::services::catalog_seed::default_catalog;
use crate::modules::products::{self, InMemoryProductRepository, ProductService};
use crate::modules::sales::services::InvoicePrinter;
use crate::modules::sales::{self, InMemorySaleRepository, SalesService};
use crate::modules::taxes::TaxCalculator;
use crate::modules::voice::{self, VoiceService};

/// Every service the API serves, built once and shared across workers
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<ProductService>,
    pub inventory: Arc<InventoryService>,
    pub sales: Arc<SalesService>,
    pub dashboard: Arc<DashboardService>,
    pub analytics: Arc<AnalyticsService>,
    pub notifications: Arc<NotificationService>,
    pub voice: Arc<VoiceService>,
    calculator: TaxCalculator,
}

impl AppServices {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(&config.billing)
    }

    /// Build the in-memory store and the services on top of it
    pub fn build(billing: &BillingConfig) -> Result<Self> {
        let clock = billing.shop_clock()?;
        let calculator = TaxCalculator::new(billing.tax_policy());

        let catalog = if billing.seed_catalog {
            default_catalog()
        } else {
            Vec::new()
        };
        let product_repo = Arc::new(InMemoryProductRepository::with_products(catalog));
        let ledger_repo = Arc::new(InMemoryLedgerRepository::new());
        let sale_repo = Arc::new(InMemorySaleRepository::new(
            billing.invoice_prefix.clone(),
            clock,
        ));
        let notification_repo = Arc::new(InMemoryNotificationRepository::with_notifications(
            seed_notifications(Utc::now()),
        ));

        Ok(Self {
            products: Arc::new(ProductService::new(product_repo.clone())),
            inventory: Arc::new(InventoryService::new(
                product_repo.clone(),
                ledger_repo.clone(),
            )),
            sales: Arc::new(SalesService::new(
                product_repo.clone(),
                sale_repo.clone(),
                ledger_repo,
                calculator,
                InvoicePrinter::new(billing.shop_name.clone(), clock),
            )),
            dashboard: Arc::new(DashboardService::new(
                product_repo.clone(),
                sale_repo,
                clock,
            )),
            analytics: Arc::new(AnalyticsService::new()),
            notifications: Arc::new(NotificationService::new(notification_repo)),
            voice: Arc::new(VoiceService::new(product_repo)),
            calculator,
        })
    }

    pub fn calculator(&self) -> TaxCalculator {
        self.calculator
    }

    /// A billing session that checks out against this process's services
    pub fn local_billing_session(&self) -> BillingSession {
        let gateway = LocalSalesGateway::new(self.products.clone(), self.sales.clone());
        BillingSession::new(Arc::new(gateway), self.calculator)
    }

    /// Register shared data, extractor error handlers and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(self.products.clone()))
            .app_data(web::Data::new(self.inventory.clone()))
            .app_data(web::Data::new(self.sales.clone()))
            .app_data(web::Data::new(self.dashboard.clone()))
            .app_data(web::Data::new(self.analytics.clone()))
            .app_data(web::Data::new(self.notifications.clone()))
            .app_data(web::Data::new(self.voice.clone()))
            .configure(health::configure)
            .configure(products::controllers::configure)
            .configure(sales::controllers::configure)
            .configure(inventory::controllers::configure)
            .configure(dashboard::controllers::configure)
            .configure(analytics::controllers::configure)
            .configure(notifications::controllers::configure)
            .configure(voice::controllers::configure);
    }
}
