//! recorder-config CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use recorder_config::cli::{
    app::{apply_config_defaults, load_merged_config, read_payload},
    args::{Cli, Commands, LogLevel, OptionsInput},
    handle_config_command, run_presets, run_resolve, run_table, run_validate, Presenter,
    ResolveOptions, EXIT_ERROR,
};
use recorder_config::domain::config::AppConfig;
use recorder_config::domain::platform::PlatformVersion;
use recorder_config::infrastructure::XdgConfigStore;

/// Logs go to stderr so stdout stays machine-readable; `RUST_LOG` wins over `--log-level`.
fn init_logging(level: LogLevel) {
    let level: tracing::Level = level.into();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Collect payload, preset and platform version from CLI args and config
async fn build_resolve_options(
    input: OptionsInput,
    platform_version: Option<PlatformVersion>,
    pretty: bool,
    presenter: &Presenter,
) -> Result<ResolveOptions, ExitCode> {
    let mut payload = match read_payload(&input).await {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e.to_string());
            return Err(ExitCode::from(e.exit_code()));
        }
    };

    let cli_config = AppConfig {
        platform_version: platform_version.map(|v| v.api_level()),
        ..Default::default()
    };
    let config = load_merged_config(cli_config).await;
    apply_config_defaults(&mut payload, &config);

    Ok(ResolveOptions {
        payload,
        preset: input.preset.map(Into::into).or_else(|| config.preset()),
        platform_version: config.platform_version_or_default(),
        pretty,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Presets => run_presets(),
        Commands::Table { platform_version } => {
            let config = load_merged_config(AppConfig {
                platform_version: platform_version.map(|v| v.api_level()),
                ..Default::default()
            })
            .await;
            run_table(config.platform_version_or_default())
        }
        Commands::Resolve {
            input,
            platform_version,
            pretty,
        } => match build_resolve_options(input, platform_version, pretty, &presenter).await {
            Ok(options) => {
                tracing::info!(platform_version = %options.platform_version, "resolving options");
                run_resolve(options).await
            }
            Err(code) => code,
        },
        Commands::Validate { input, pretty } => {
            match build_resolve_options(input, None, pretty, &presenter).await {
                Ok(options) => run_validate(options),
                Err(code) => code,
            }
        }
    }
}
