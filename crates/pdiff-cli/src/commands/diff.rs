use crate::errors::CliError;
use crate::git::{BaselineSource, GitBaseline};
use crate::logger;
use clap::Args;
use pdiff_config::{resolve_git, Config, GIT_EXE};
use pdiff_manifest::{diff, DiffReport, Manifest, NoBaseline, ReportStyle};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct DiffArgs {
    /// Current manifest (default: public/docs/plugins.json)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Revision holding the previous manifest (default: HEAD~1)
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,
}

/// Resolved inputs for a single comparison
#[derive(Debug, Clone)]
pub struct DiffCommand {
    pub manifest_path: PathBuf,
    pub style: ReportStyle,
}

impl DiffCommand {
    pub fn new(manifest_path: PathBuf, indent: &str) -> Self {
        let style = ReportStyle::for_manifest(&manifest_path, indent);
        DiffCommand {
            manifest_path,
            style,
        }
    }
}

/// What a run ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    Compared(DiffReport),
    CurrentUnreadable,
}

/// Compare the configured manifest against its previous git revision and
/// print the report to stdout
pub fn handle_diff(args: DiffArgs, config: &Config) -> Result<DiffOutcome, CliError> {
    let manifest_path = args.manifest.unwrap_or_else(|| config.get_manifest_path());
    let rev = args
        .base
        .unwrap_or_else(|| config.get_base_ref().to_string());
    let git = resolve_git(config.git_path.as_deref()).unwrap_or_else(|e| {
        logger::warn(&format!("{}. Falling back to {} on PATH", e, GIT_EXE));
        resolve_git(None).unwrap_or_else(|_| PathBuf::from(GIT_EXE))
    });

    logger::debug(&format!(
        "Comparing {} against {}",
        manifest_path.display(),
        rev
    ));

    let cmd = DiffCommand::new(manifest_path, config.get_indent());
    let source = GitBaseline::new(git, rev);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_diff(&cmd, &source, &mut out)
}

/// Load the current manifest, fetch the baseline, and write report lines to
/// `out`. A current manifest that can't be read is reported, not returned as
/// an error.
pub fn run_diff(
    cmd: &DiffCommand,
    source: &dyn BaselineSource,
    out: &mut dyn Write,
) -> Result<DiffOutcome, CliError> {
    let current = match Manifest::load_from_path(&cmd.manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            logger::debug(&format!(
                "Could not load {}: {}",
                cmd.manifest_path.display(),
                e
            ));
            writeln!(out, "{}", cmd.style.unreadable(&e))?;
            return Ok(DiffOutcome::CurrentUnreadable);
        }
    };

    logger::spinner_start("Fetching previous manifest...");
    let baseline = source.fetch(&cmd.manifest_path);
    logger::spinner_stop();

    let report = diff(&current, &baseline);
    for line in cmd.style.render(&report) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    match report.no_baseline {
        Some(NoBaseline::Missing) => logger::step("No baseline manifest found"),
        Some(NoBaseline::Empty) => logger::step("Baseline manifest was empty"),
        None => {}
    }
    logger::info(&format!(
        "{} added, {} changed, {} removed",
        report.count_added(),
        report.count_changed(),
        report.count_removed()
    ));

    Ok(DiffOutcome::Compared(report))
}
