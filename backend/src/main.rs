use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  discos_lib::init_tracing();

  if let Err(e) = discos_lib::run().await {
    error!("fatal: {e:#}");
    return Err(e);
  }

  Ok(())
}
