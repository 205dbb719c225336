use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use gradle_depdiff::application::dto::OutputFormat;

/// Turn Gradle dependency trees into reports and compare them between builds
#[derive(Parser, Debug)]
#[command(name = "gradle-depdiff")]
#[command(version)]
#[command(
    about = "Turn Gradle dependency trees into reports and compare them between builds",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./gradle-depdiff.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colors and spinners (implied when the CI environment variable is set)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a report from saved `./gradlew <module>:dependencies` output
    Collect(CollectArgs),
    /// Compare the compile dependencies of two reports
    Compare(CompareArgs),
    /// Print the reconstructed dependency tree of one configuration
    Tree(TreeArgs),
}

/// Which configuration of a dependency dump to read
#[derive(Args, Debug, Clone)]
pub struct SectionArgs {
    /// Dependency output file, or `-` for stdin
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub input: String,

    /// Build variant; reads `<variant>CompileClasspath` [default: release]
    #[arg(long)]
    pub variant: Option<String>,

    /// Exact configuration name, overriding --variant
    #[arg(long, value_name = "NAME")]
    pub configuration: Option<String>,
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    #[command(flatten)]
    pub section: SectionArgs,

    /// Report file to write (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Application name recorded in the report
    #[arg(long)]
    pub app_name: Option<String>,

    /// Application id recorded in the report
    #[arg(long)]
    pub application_id: Option<String>,

    /// Version name recorded in the report; used as its label when comparing
    #[arg(long)]
    pub version_name: Option<String>,

    /// Version code recorded in the report
    #[arg(long)]
    pub version_code: Option<String>,

    /// Git commit recorded in the report
    #[arg(long)]
    pub commit: Option<String>,

    /// Git branch recorded in the report
    #[arg(long)]
    pub branch: Option<String>,

    /// Git tag recorded in the report
    #[arg(long)]
    pub tag: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Report of the earlier build
    pub old: PathBuf,

    /// Report of the later build
    pub new: PathBuf,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Exclude dependencies whose group:name matches a pattern (supports wildcards: *)
    /// Can be specified multiple times: -e "androidx.compose.*" -e "*:kotlin-stdlib*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Exit with code 1 when any dependency was added, removed or changed
    #[arg(long)]
    pub fail_on_changes: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub section: SectionArgs,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
