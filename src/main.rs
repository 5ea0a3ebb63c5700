use clap::Parser;
use repo_submit::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "repo-submit", about = "Submit a repository to the README PR service")]
struct Args {
    /// Service URL that receives the submission (POST)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config file: {e}");
            config::SubmitConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            log_level: args.log_level,
        },
    );

    // File logger so log lines never land on the alternate screen
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("repo-submit starting up with endpoint: {}", resolved.endpoint);
    log::debug!("Resolved config: {:?}", resolved);

    repo_submit::tui::run(resolved)
}
