use crate::commands::{
    run_analysis, run_benchmark, run_dataset, run_impact, run_scorecard, AnalysisArgs,
    BenchmarkArgs, DatasetArgs, ImpactArgs, ScorecardArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dei_insights::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "DEI Insights",
    about = "Synthesize diversity metrics, benchmark organizations, and project intervention ROI",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a synthesized dataset and its industry overview
    Dataset(DatasetArgs),
    /// Score one organization against the configured targets
    Scorecard(ScorecardArgs),
    /// Compare a focal organization with its peers
    Benchmark(BenchmarkArgs),
    /// Project the business impact of a DEI intervention
    Impact(ImpactArgs),
    /// Print a canned analysis block
    Analysis(AnalysisArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dataset(args) => run_dataset(args),
        Command::Scorecard(args) => run_scorecard(args),
        Command::Benchmark(args) => run_benchmark(args),
        Command::Impact(args) => run_impact(args),
        Command::Analysis(args) => run_analysis(args),
    }
}
