use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use qr_composer::app::App;
use qr_composer::cli::Cli;
use qr_composer::dialogs::{Dialogs, TerminalDialogs};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.app_config();

    #[cfg(feature = "native-dialogs")]
    if cli.native {
        let dialogs = qr_composer::dialogs::NativeDialogs::new(cli.out_dir.clone());
        return run(&cli, App::load(&config, dialogs));
    }

    let dialogs = TerminalDialogs::new(cli.out_dir.clone());
    run(&cli, App::load(&config, dialogs))
}

fn run<D: Dialogs>(cli: &Cli, mut app: App<D>) -> anyhow::Result<ExitCode> {
    println!("GiftQR - QR code generator\n");

    let url = field(cli.url.as_deref(), "Enter the link")?;
    let label = field(cli.label.as_deref(), "QR file name")?;

    match app.generate_and_save(&url, &label) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

// Form field: the flag value when given, else a prompt.
fn field(value: Option<&str>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("failed to read {prompt:?}")),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
