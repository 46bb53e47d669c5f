use termfolio::app::App;
use termfolio::config::FolioConfig;
use termfolio::error::user_friendly_message;
use termfolio::{simple, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Silent unless RUST_LOG is set; logs go to stderr so the alternate
    // screen stays clean when they are redirected to a file.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // `--plain` keeps the quiz usable without raw terminal support
    if std::env::args().any(|arg| arg == "--plain") {
        let config = FolioConfig::load()?;
        return simple::run_quiz(&config);
    }

    let mut app = App::new().map_err(|e| {
        eprintln!("{}", user_friendly_message(&e));
        e
    })?;
    app.init()?;
    app.run().await
}
