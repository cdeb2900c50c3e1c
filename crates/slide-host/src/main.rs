use slide_host::{serve, HostConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = HostConfig::default();
    log::info!("serving {} on {}", config.public_dir.display(), config.addr);
    serve(config).await
}
