use catalog_store::logging::init_tracing;
use catalog_store::proxy::{self, CatalogClient, ProxyConfig};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ProxyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let client = CatalogClient::new(&config.base_url, &config.api_key);
    if let Err(e) = proxy::serve(client, &config.addr).await {
        tracing::error!(error = %e, addr = %config.addr, "catalog proxy stopped");
        std::process::exit(1);
    }
}
