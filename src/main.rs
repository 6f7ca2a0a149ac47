use sitehost::{config, logger, StaticServer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let server = StaticServer::new(&cfg.site.root)?.with_access_log(cfg.logging.access_log);
    let handle = server.start(addr)?;

    logger::log_server_start(&handle.addr(), &cfg);

    tokio::signal::ctrl_c().await?;

    logger::log_shutdown();
    handle.shutdown().await;

    Ok(())
}
