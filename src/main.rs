use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(error) = servicehub::run().await {
        error!("servicehub exited with error: {:?}", error);
        std::process::exit(1);
    }
}
