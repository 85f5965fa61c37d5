#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    video_info_api_lib::run().await
}
