// Application builders for tests: in-memory services with the seed catalog, and a
// real listening server (actix-test) for tests that go over the network.

use actix_web::middleware::NormalizePath;
use actix_web::App;
use retail_boss::config::BillingConfig;
use retail_boss::middleware::{ErrorHandler, RequestId};
use retail_boss::AppServices;

pub use actix_test::TestServer;

/// Services over a freshly seeded in-memory store
pub fn test_services() -> AppServices {
    test_services_with(BillingConfig::default())
}

pub fn test_services_with(billing: BillingConfig) -> AppServices {
    AppServices::build(&billing).expect("test services should build")
}

/// Start a real HTTP server on a random port serving `services`
///
/// The server stops when the returned `TestServer` is dropped.
pub fn spawn_test_server(services: AppServices) -> TestServer {
    actix_test::start(move || {
        let services = services.clone();
        App::new()
            .wrap(ErrorHandler)
            .wrap(NormalizePath::trim())
            .wrap(RequestId)
            .configure(move |cfg| services.configure(cfg))
    })
}

/// Base URL of a test server, without trailing slash
pub fn base_url(srv: &TestServer) -> String {
    format!("http://{}", srv.addr())
}
