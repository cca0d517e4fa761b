#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quotesync::app::run().await
}
