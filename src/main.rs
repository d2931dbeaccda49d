//! landing-page CLI entry point

use std::process::ExitCode;

use clap::Parser;

use landing_page::cli::{
    app::{load_merged_config, run_show, run_since, run_video_id, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
};
use landing_page::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version come through here too
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    let store = cli
        .config
        .map(|path| XdgConfigStore::with_path(path))
        .unwrap_or_else(XdgConfigStore::new);

    match cli.command {
        // Config management works on the raw file, not the merged view
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::VideoId { url, json }) => run_video_id(&url, json),
        Some(Commands::Since { birth_date, json }) => {
            let config = load_merged_config(&store).await;
            run_since(config, birth_date, json)
        }
        None => {
            let config = load_merged_config(&store).await;
            run_show(config, cli.show).await
        }
    }
}
