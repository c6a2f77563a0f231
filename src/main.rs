use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use officehours_client::config::ClientConfig;
use officehours_client::views::Outcome;
use officehours_client::views::slot_board::SlotBoardController;
use officehours_core::scope::ViewScope;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Loading office hours from {}", config.api_url);

    let view = config.view;
    let api = officehours_client::connect(config)?;
    let scope = ViewScope::new();
    let board = SlotBoardController::new(api, view, scope.handle());

    match board.refresh().await {
        Outcome::Done(board) => {
            print!("{}", board.render_text());
            Ok(())
        }
        Outcome::Failed(message) => Err(eyre!(message)),
        _ => Err(eyre!("Board refresh did not complete")),
    }
}
