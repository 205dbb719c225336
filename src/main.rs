mod cli;

use cli::{Cli, CollectArgs, Command, CompareArgs, SectionArgs, TreeArgs};
use gradle_depdiff::adapters::outbound::console::StderrProgressReporter;
use gradle_depdiff::adapters::outbound::filesystem::FileSystemReader;
use gradle_depdiff::application::dto::{
    CollectRequest, CompareRequest, OutputFormat, ReportLabels, TreeRequest,
};
use gradle_depdiff::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use gradle_depdiff::application::use_cases::{
    CollectReportUseCase, CompareReportsUseCase, InspectTreeUseCase,
};
use gradle_depdiff::config::{self, ConfigFile};
use gradle_depdiff::ports::outbound::{InputSource, ProgressReporter};
use gradle_depdiff::shared::error::{DepDiffError, ExitCode};
use gradle_depdiff::shared::Result;
use std::process;
use std::str::FromStr;

const DEFAULT_VARIANT: &str = "release";

fn main() {
    // clap exits with code 2 on invalid arguments
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();

            let exit_code = match e.downcast_ref::<DepDiffError>() {
                Some(DepDiffError::Validation { .. }) => ExitCode::InvalidArguments,
                _ => ExitCode::ApplicationError,
            };
            process::exit(exit_code.as_i32());
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Settings shared by every command after merging CLI flags over the config file
struct Settings {
    config: ConfigFile,
    plain: bool,
}

impl Settings {
    fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                let config = config::load_config_from_path(path)?;
                eprintln!("📄 Loaded config from: {}", path.display());
                config
            }
            None => {
                let cwd = std::env::current_dir()?;
                match config::discover_config(&cwd)? {
                    Some(config) => {
                        eprintln!(
                            "📄 Auto-discovered config file: {}",
                            cwd.join(config::CONFIG_FILENAME).display()
                        );
                        config
                    }
                    None => ConfigFile::default(),
                }
            }
        };

        let plain =
            cli.plain || config.plain_output.unwrap_or(false) || std::env::var_os("CI").is_some();

        Ok(Self { config, plain })
    }

    fn format(&self, cli_format: Option<OutputFormat>) -> Result<OutputFormat> {
        match (cli_format, &self.config.format) {
            (Some(format), _) => Ok(format),
            (None, Some(configured)) => OutputFormat::from_str(configured)
                .map_err(|message| DepDiffError::Validation { message }.into()),
            (None, None) => Ok(OutputFormat::default()),
        }
    }

    /// Returns (variant, configuration name)
    fn section(&self, args: &SectionArgs) -> (String, String) {
        let variant = args
            .variant
            .clone()
            .or_else(|| self.config.variant.clone())
            .unwrap_or_else(|| DEFAULT_VARIANT.to_string());

        let configuration = args
            .configuration
            .clone()
            .or_else(|| {
                // An explicit --variant outranks a configured configuration name
                if args.variant.is_some() {
                    None
                } else {
                    self.config.configuration.clone()
                }
            })
            .unwrap_or_else(|| CollectRequest::compile_classpath(&variant));

        (variant, configuration)
    }

    fn exclude_patterns(&self, cli_patterns: Vec<String>) -> Vec<String> {
        if cli_patterns.is_empty() {
            self.config.exclude_dependencies.clone().unwrap_or_default()
        } else {
            cli_patterns
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = Settings::load(&cli)?;

    match cli.command {
        Command::Collect(args) => run_collect(&settings, args),
        Command::Compare(args) => run_compare(&settings, args),
        Command::Tree(args) => run_tree(&settings, args),
    }
}

fn run_collect(settings: &Settings, args: CollectArgs) -> Result<ExitCode> {
    let (variant, configuration) = settings.section(&args.section);
    let progress_reporter = StderrProgressReporter::new(settings.plain);

    let request = CollectRequest {
        input: InputSource::from_arg(&args.section.input),
        variant,
        configuration,
        labels: ReportLabels {
            app_name: args.app_name,
            application_id: args.application_id,
            version_name: args.version_name,
            version_code: args.version_code,
            git_commit: args.commit,
            git_branch: args.branch,
            git_tag: args.tag,
        },
    };

    let use_case = CollectReportUseCase::new(FileSystemReader::new(), &progress_reporter);
    let response = use_case.execute(request)?;

    let mut json = serde_json::to_string_pretty(&response.report)?;
    json.push('\n');

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output, args.overwrite));
    presenter.present(&json)?;

    Ok(ExitCode::Success)
}

fn run_compare(settings: &Settings, args: CompareArgs) -> Result<ExitCode> {
    let format = settings.format(args.format)?;
    let fail_on_changes = args.fail_on_changes || settings.config.fail_on_changes.unwrap_or(false);
    let progress_reporter = StderrProgressReporter::new(settings.plain);

    let request = CompareRequest::new(args.old, args.new, settings.exclude_patterns(args.exclude));
    let use_case = CompareReportsUseCase::new(FileSystemReader::new(), &progress_reporter);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let response = runtime.block_on(use_case.execute(request))?;

    let formatter = FormatterFactory::comparison(format, settings.plain);
    let output = formatter.format(&response.comparison)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output, args.overwrite));
    presenter.present(&output)?;

    if response.has_changes() {
        progress_reporter.report_completion(&format!(
            "📦 {} change(s) between {}",
            response.comparison.diff.total_changes(),
            response.comparison.title()
        ));
        if fail_on_changes {
            return Ok(ExitCode::DifferencesDetected);
        }
    }
    Ok(ExitCode::Success)
}

fn run_tree(settings: &Settings, args: TreeArgs) -> Result<ExitCode> {
    let format = settings.format(args.format)?;
    let (_, configuration) = settings.section(&args.section);
    let progress_reporter = StderrProgressReporter::new(settings.plain);

    let use_case = InspectTreeUseCase::new(FileSystemReader::new(), &progress_reporter);
    let response = use_case.execute(TreeRequest {
        input: InputSource::from_arg(&args.section.input),
        configuration,
    })?;

    let output = FormatterFactory::tree(format).format_tree(&response.tree)?;
    PresenterFactory::create(PresenterType::Stdout).present(&output)?;

    Ok(ExitCode::Success)
}
