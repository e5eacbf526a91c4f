use anyhow::Context;
use wpt::domain::config::ApiConfig;
use wpt::kernel::config::load_config;
use wpt_server::{Server, logger};

#[cfg(feature = "profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(feature = "profiling")]
    let _profiler = dhat::Profiler::new_heap();

    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;
    let _log = logger(env!("CARGO_PKG_NAME"), &cfg.logging)?.init()?;

    Server::builder().config(cfg).build()?.run().await
}
