use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use survey_cli::{commands, interactive, telemetry, Outcome};
use survey_flow::{SurveyConfig, SurveySession};
use survey_scoring::ResultsReport;
use survey_store::FileStore;
use survey_submit::SubmissionDispatcher;
use tokio::task::JoinHandle;

fn cli() -> Command {
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON");

    Command::new("survey")
        .version(survey_cli::VERSION)
        .about("Likert questionnaire with per-scale results")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("State file (overrides storage.path)"),
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .global(true)
                .help("Submission URL (overrides submission.endpoint)"),
        )
        .subcommand(Command::new("take").about("Answer the questionnaire (default)"))
        .subcommand(
            Command::new("results")
                .about("Show results of the completed survey")
                .arg(json.clone()),
        )
        .subcommand(Command::new("reset").about("Umfrage neu starten"))
        .subcommand(
            Command::new("catalog")
                .about("List scales and questions")
                .arg(json),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<SurveyConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SurveyConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SurveyConfig::default(),
    };
    if let Some(path) = matches.get_one::<PathBuf>("store") {
        config = config.with_storage_path(path);
    }
    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config = config.with_endpoint(endpoint);
    }
    Ok(config)
}

fn open_session(config: &SurveyConfig) -> anyhow::Result<SurveySession<FileStore>> {
    let catalog = config.load_catalog().context("failed to load catalog")?;
    let store = config.open_store().context("failed to open state file")?;
    let submitter = config.build_submitter().context("failed to set up submission")?;
    let dispatcher = SubmissionDispatcher::from_current(submitter)?;
    Ok(SurveySession::start(Arc::new(catalog), store, dispatcher)?)
}

async fn take(config: &SurveyConfig) -> anyhow::Result<()> {
    let mut session = open_session(config)?;
    let mut stdout = std::io::stdout();

    if session.is_results() {
        return commands::results(&session, false, &mut stdout);
    }

    // Blocking stdin on this thread; delivery runs on the worker threads.
    let outcome = interactive::run(&mut session, std::io::stdin().lock(), &mut stdout)?;
    let mut deliveries = session.take_detached();
    match outcome {
        Outcome::Submitted(handle) => {
            deliveries.push(handle);
            let report: ResultsReport = session.results()?;
            println!();
            commands::write_report(&report, false, &mut stdout)?;
        }
        Outcome::Quit => println!("\nAbgebrochen, nichts gespeichert."),
    }

    await_deliveries(deliveries, config.submission_timeout()).await;
    Ok(())
}

async fn await_deliveries(deliveries: Vec<JoinHandle<()>>, limit: Duration) {
    if deliveries.is_empty() {
        return;
    }
    let all = async {
        for handle in deliveries {
            let _ = handle.await;
        }
    };
    if tokio::time::timeout(limit, all).await.is_err() {
        tracing::warn!("submission still running at exit");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    telemetry::init(&config.logging)?;

    let mut stdout = std::io::stdout();
    match matches.subcommand() {
        Some(("results", args)) => {
            let session = open_session(&config)?;
            commands::results(&session, args.get_flag("json"), &mut stdout)
        }
        Some(("reset", _)) => {
            let mut session = open_session(&config)?;
            commands::reset(&mut session, &mut stdout)
        }
        Some(("catalog", args)) => {
            let catalog = config.load_catalog().context("failed to load catalog")?;
            commands::catalog(&catalog, args.get_flag("json"), &mut stdout)
        }
        _ => take(&config).await,
    }
}
