#[tokio::main]
async fn main() {
    cf_leaderboard::start_server().await;
}
