use anyhow::Result;
use clap::{Parser, ValueEnum};
use rxrename_core::{
    app_paths, load_config, run, AppConfig, Console, FsRenamer, OutputTemplate, PreviewFormat,
    RenameConfig, RenameError,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "rxrename")]
#[command(about = "Rename files in bulk with a regex pattern and an output template")]
struct Cli {
    /// Regex matched against each file name [default: (.*)]
    #[arg(short = 'o', long)]
    pattern: Option<String>,
    /// New name; use $\{1\}, $\{2\}, ... for captured groups [default: ${1}]
    #[arg(short = 'n', long = "name")]
    template: Option<String>,
    /// Character that replaces spaces in the new name [default: " "]
    #[arg(short = 's', long)]
    separator: Option<char>,
    #[arg(short = 'v', long, default_value_t = false)]
    verbose: bool,
    /// Show the groups the pattern captures from the first file and exit
    #[arg(short = 't', long = "test", default_value_t = false)]
    test_only: bool,
    /// Rename without asking for confirmation
    #[arg(short = 'y', long = "yes", default_value_t = false)]
    auto_confirm: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Print the config file location and its defaults, then exit
    #[arg(long, default_value_t = false)]
    show_config: bool,
    paths: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

impl From<OutputFormat> for PreviewFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if cli.show_config {
        return cmd_show_config();
    }

    let config = build_config(&cli, load_config)?;
    let mut console = Console::stdio();
    run(&config, &cli.paths, &mut console, &FsRenamer)?;
    Ok(())
}

/// Rejects an empty path list before the config file is read.
fn build_config(cli: &Cli, load: impl FnOnce() -> Result<AppConfig>) -> Result<RenameConfig> {
    if cli.paths.is_empty() {
        return Err(RenameError::Usage.into());
    }
    Ok(resolve_config(load()?, cli))
}

fn resolve_config(file: AppConfig, cli: &Cli) -> RenameConfig {
    let template = cli.template.as_deref().unwrap_or(&file.template);
    RenameConfig {
        pattern: cli.pattern.clone().unwrap_or(file.pattern),
        template: OutputTemplate::from_raw(template),
        separator: cli.separator.unwrap_or(file.separator),
        verbose: cli.verbose,
        test_only: cli.test_only,
        auto_confirm: cli.auto_confirm || file.auto_confirm,
        preview_format: cli.output.into(),
    }
}

fn cmd_show_config() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("config file: {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Diagnostics go to stderr when verbose and are dropped otherwise.
fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rxrename_core=debug,rxrename=debug"))
    } else {
        EnvFilter::new("off")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
