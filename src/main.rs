use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitflow_version::boundary::BoundaryWarning;
use gitflow_version::config::{self, Config};
use gitflow_version::domain::{compare_str, TagPattern};
use gitflow_version::git::{self, Git2Repository};
use gitflow_version::{ui, HotfixVersion, VersionValue};

#[derive(Parser)]
#[command(
    name = "gitflow-version",
    version,
    about = "Parse, compare and derive release and hotfix versions"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a version string decomposes
    Parse { version: String },
    /// Compare two versions and print <, = or >
    Compare { left: String, right: String },
    /// Print the next version
    Next { version: String },
    /// Print the version of a hotfix branch cut from VERSION
    Hotfix { version: String },
    /// Print the version preceding VERSION on the hotfix line
    HotfixBase { version: String },
    /// Print VERSION without its snapshot suffix
    Release { version: Option<String> },
    /// Print VERSION with a -SNAPSHOT suffix
    Snapshot { version: String },
    /// Exit with 0 when VERSION is a snapshot, 1 otherwise
    IsSnapshot { version: String },
    /// Print the highest-versioned tag of a repository
    Latest {
        #[arg(long, default_value = ".", help = "Repository path")]
        repo: String,

        #[arg(long, help = "Tag pattern, overrides the configured one")]
        pattern: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    match args.command {
        Command::Parse { version } => {
            let parsed = VersionValue::parse(&version)?;
            ui::display_version(&parsed);
        }
        Command::Compare { left, right } => {
            let ordering = compare_str(&left, &right)?;
            println!("{} {} {}", left, ui::ordering_symbol(ordering), right);
        }
        Command::Next { version } => {
            println!("{}", HotfixVersion::parse(&version)?.next_version()?);
        }
        Command::Hotfix { version } => {
            println!("{}", HotfixVersion::parse(&version)?.hotfix_version_string()?);
        }
        Command::HotfixBase { version } => {
            let parsed = HotfixVersion::parse(&version)?;
            println!("{}", parsed.decremented_hotfix_version_string()?);
        }
        Command::Release { version } => {
            let version = version
                .or_else(|| config.release.default_version.clone())
                .context("No version given and no default release version configured")?;
            println!("{}", HotfixVersion::parse(&version)?.release_version_string());
        }
        Command::Snapshot { version } => {
            println!("{}", HotfixVersion::parse(&version)?.snapshot_version_string());
        }
        Command::IsSnapshot { version } => {
            let snapshot = HotfixVersion::parse(&version)?.is_snapshot();
            println!("{}", snapshot);
            return Ok(if snapshot { 0 } else { 1 });
        }
        Command::Latest { repo, pattern } => return latest(&config, &repo, pattern.as_deref()),
    }

    Ok(0)
}

fn latest(config: &Config, repo_path: &str, pattern: Option<&str>) -> Result<i32> {
    let pattern = match pattern {
        Some(p) => TagPattern::new(p)?,
        None => config.tags.tag_pattern()?,
    };

    let repo = Git2Repository::open(repo_path)
        .with_context(|| format!("Not in a git repository: {}", repo_path))?;
    ui::display_status(&format!("Scanning tags matching '{}'", pattern));
    let found = git::latest_release(&repo, &pattern)?;

    for warning in &found.warnings {
        if config.behavior.strict_tags {
            if let BoundaryWarning::UnparsableTag { .. } = warning {
                anyhow::bail!("{}", warning);
            }
        }
        ui::display_boundary_warning(warning);
    }

    match found.latest {
        Some(latest) => {
            ui::display_success(&format!(
                "Latest release {} (tag {}, {})",
                latest.version(),
                latest.tag().name,
                latest.tag().target
            ));
            let hotfix = HotfixVersion::from(latest.version().clone()).hotfix_version_string()?;
            ui::display_status(&format!("Next hotfix tag: {}", pattern.format(&hotfix)));
            Ok(0)
        }
        None => {
            ui::display_boundary_warning(&BoundaryWarning::NoReleaseTags {
                pattern: pattern.to_string(),
            });
            Ok(1)
        }
    }
}
