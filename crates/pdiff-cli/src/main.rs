use clap::Parser;
use pdiff::{
    commands::diff::{self, DiffArgs},
    logger, GlobalOpts,
};
use pdiff_config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pdiff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Report plugin manifest changes since the previous commit",
    long_about = "pdiff compares the plugin manifest in the working tree with the one \
                  in the previous git revision and prints added, removed and changed \
                  plugins. Run it without arguments from the repository root."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(flatten)]
    diff: DiffArgs,
}

fn main() {
    let cli = Cli::parse();

    init_tracing();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        if !cli.global.quiet {
            eprintln!("Warning: Failed to initialize logger: {}", e);
        }
    }

    let config = Config::load().unwrap_or_else(|e| {
        logger::warn(&format!("{}. Using defaults.", e));
        Config::default()
    });
    for (key, value) in config.values_iter() {
        logger::debug(&format!("config {} = {}", key, value));
    }

    if let Err(e) = diff::handle_diff(cli.diff, &config) {
        logger::error(&e.to_string());
        if let Some(path) = logger::get_log_path() {
            eprintln!("Log file: {}", path.display());
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
