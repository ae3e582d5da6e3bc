#[tokio::main]
async fn main() -> std::io::Result<()> {
    stickman_server::frameworks::server::run_with_config().await
}
