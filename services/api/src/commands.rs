use clap::Args;
use dei_insights::analytics::{
    benchmark_from_dataset, compute_scorecard, find_record, simulate_impact, AnalysisKind,
    BenchmarkComparison, ImpactProjection, IndustryOverview, OrganizationMetrics, Scorecard,
    ScorecardTargets,
};
use dei_insights::config::{AnalyticsConfig, AppConfig};
use dei_insights::error::AppError;
use std::io::{self, Write};

use crate::infra::{materialize_dataset, parse_analysis_kind};

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetOptions {
    /// Seed for the synthetic dataset (defaults to DEI_SEED or 42)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Organization to synthesize; repeat for several (defaults to the built-in roster)
    #[arg(long = "org")]
    pub(crate) organizations: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TargetOptions {
    /// Target override as key=fraction, e.g. gender_diversity=0.45; repeatable
    #[arg(long)]
    pub(crate) target: Vec<String>,
}

impl TargetOptions {
    fn resolve(&self) -> Result<ScorecardTargets, AppError> {
        Ok(ScorecardTargets::with_overrides(&self.target)?)
    }
}

#[derive(Args, Debug)]
pub(crate) struct DatasetArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetOptions,
    /// Emit the records as CSV instead of a table
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScorecardArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetOptions,
    #[command(flatten)]
    pub(crate) targets: TargetOptions,
    /// Organization to score
    #[arg(long)]
    pub(crate) organization: String,
}

#[derive(Args, Debug)]
pub(crate) struct BenchmarkArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetOptions,
    #[command(flatten)]
    pub(crate) targets: TargetOptions,
    /// Organization at the center of the comparison
    #[arg(long)]
    pub(crate) focal: String,
    /// Peer organization; repeat for several (defaults to every other organization)
    #[arg(long)]
    pub(crate) compare: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ImpactArgs {
    /// Expected increase in diverse hiring, in percent
    #[arg(long)]
    pub(crate) diversity_increase: f64,
    /// Expected inclusion survey improvement, in points
    #[arg(long)]
    pub(crate) inclusion_improvement: f64,
    /// Expected improvement in diverse retention, in percent
    #[arg(long)]
    pub(crate) retention_improvement: f64,
    /// Intervention budget in lakhs
    #[arg(long)]
    pub(crate) budget_lakhs: f64,
    /// Headcount affected by the intervention
    #[arg(long)]
    pub(crate) employees: u32,
    /// Average salary in lakhs (defaults to DEI_BASE_SALARY_LAKHS or 12)
    #[arg(long)]
    pub(crate) base_salary_lakhs: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalysisArgs {
    /// executive_summary, gap_analysis, or recommendations
    #[arg(value_parser = parse_analysis_kind)]
    pub(crate) kind: AnalysisKind,
}

fn analytics_defaults() -> Result<AnalyticsConfig, AppError> {
    Ok(AppConfig::load()?.analytics)
}

pub(crate) fn run_dataset(args: DatasetArgs) -> Result<(), AppError> {
    let defaults = analytics_defaults()?;
    let (seed, records) = materialize_dataset(&args.dataset, &defaults)?;
    let overview = IndustryOverview::from_records(&records)?;

    let mut out = io::stdout().lock();
    if args.csv {
        write_dataset_csv(&mut out, &records)?;
    } else {
        render_dataset(&mut out, seed, &records, &overview)?;
    }
    out.flush()?;
    Ok(())
}

pub(crate) fn run_scorecard(args: ScorecardArgs) -> Result<(), AppError> {
    let defaults = analytics_defaults()?;
    let targets = args.targets.resolve()?;
    let (seed, records) = materialize_dataset(&args.dataset, &defaults)?;
    let record = find_record(&records, &args.organization)?;
    let scorecard = compute_scorecard(record, &targets);

    let mut out = io::stdout().lock();
    writeln!(out, "Scorecard (seed {seed})")?;
    render_scorecard(&mut out, &scorecard)?;
    Ok(())
}

pub(crate) fn run_benchmark(args: BenchmarkArgs) -> Result<(), AppError> {
    let defaults = analytics_defaults()?;
    let targets = args.targets.resolve()?;
    let (seed, records) = materialize_dataset(&args.dataset, &defaults)?;

    let peers: Vec<String> = if args.compare.is_empty() {
        records.iter().map(|record| record.name.clone()).collect()
    } else {
        args.compare
    };
    let comparison = benchmark_from_dataset(&records, &args.focal, &peers, &targets)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Benchmark (seed {seed})")?;
    render_benchmark(&mut out, &comparison)?;
    Ok(())
}

pub(crate) fn run_impact(args: ImpactArgs) -> Result<(), AppError> {
    let base_salary_lakhs = match args.base_salary_lakhs {
        Some(value) => value,
        None => analytics_defaults()?.base_salary_lakhs,
    };
    let projection = simulate_impact(
        args.diversity_increase,
        args.inclusion_improvement,
        args.retention_improvement,
        args.budget_lakhs,
        args.employees,
        base_salary_lakhs,
    )?;

    let mut out = io::stdout().lock();
    render_impact(&mut out, &projection)?;
    Ok(())
}

pub(crate) fn run_analysis(args: AnalysisArgs) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", args.kind.label())?;
    writeln!(out, "{}", args.kind.template())?;
    Ok(())
}

fn render_dataset<W: Write>(
    out: &mut W,
    seed: u64,
    records: &[OrganizationMetrics],
    overview: &IndustryOverview,
) -> io::Result<()> {
    writeln!(out, "Synthetic diversity dataset (seed {seed})")?;
    writeln!(
        out,
        "- {} organizations | {} employees",
        overview.organization_count, overview.total_employees
    )?;
    writeln!(
        out,
        "- Avg gender diversity {:.1}% | avg pay equity {:.1}% | avg inclusion {:.1}/5.0",
        overview.avg_gender_diversity * 100.0,
        overview.avg_pay_equity * 100.0,
        overview.avg_inclusion_score
    )?;

    writeln!(out, "\nOrganizations")?;
    for record in records {
        writeln!(
            out,
            "- {} ({}): gender {:.1}% | leadership {:.1}% | pay equity {:.1}% | inclusion {:.1} | retention {:.1}% | promotion {:.1}% | {} employees | revenue {:.0} cr | DEI budget {:.2}%",
            record.name,
            record.region,
            record.gender_diversity * 100.0,
            record.leadership_diversity * 100.0,
            record.pay_equity_score * 100.0,
            record.inclusion_survey_score,
            record.retention_rate_diverse * 100.0,
            record.promotion_rate_diverse * 100.0,
            record.employee_count,
            record.revenue_crores,
            record.dei_budget_pct
        )?;
    }
    Ok(())
}

fn write_dataset_csv<W: Write>(out: W, records: &[OrganizationMetrics]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer
            .serialize(record)
            .map_err(|err| AppError::Export(err.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

fn render_scorecard<W: Write>(out: &mut W, scorecard: &Scorecard) -> io::Result<()> {
    writeln!(out, "{}", scorecard.organization)?;
    for entry in &scorecard.entries {
        let marker = if entry.meets_target() { "meets" } else { "below" };
        writeln!(
            out,
            "- {}: {:.1} vs target {:.1} (gap {:+.1}, {marker})",
            entry.label, entry.value, entry.target, entry.gap
        )?;
    }

    let shortfalls = scorecard.shortfalls();
    if let Some(largest) = shortfalls.first() {
        writeln!(
            out,
            "Largest shortfall: {} ({:+.1} points)",
            largest.label, largest.gap
        )?;
    }
    Ok(())
}

fn render_benchmark<W: Write>(out: &mut W, comparison: &BenchmarkComparison) -> io::Result<()> {
    writeln!(out, "\nFocal organization")?;
    render_scorecard(out, &comparison.focal)?;

    if comparison.comparisons.is_empty() {
        writeln!(out, "\nPeers: none")?;
        return Ok(());
    }

    writeln!(out, "\nSide-by-side")?;
    for triplet in comparison.triplets() {
        writeln!(
            out,
            "- {} | {}: {:.1} vs {:.1}",
            triplet.organization,
            triplet.metric.label(),
            triplet.focal_value,
            triplet.comparison_value
        )?;
    }
    Ok(())
}

fn render_impact<W: Write>(out: &mut W, projection: &ImpactProjection) -> io::Result<()> {
    writeln!(out, "Business impact projection (lakhs)")?;
    writeln!(
        out,
        "- Hiring cost per head {:.2} | turnover cost per head {:.2}",
        projection.hiring_cost_per_head, projection.turnover_cost_per_head
    )?;
    for (label, value) in projection.components() {
        writeln!(out, "- {label}: {value:.2}")?;
    }
    writeln!(out, "- Total benefit: {:.2}", projection.total_benefit)?;
    writeln!(out, "- Investment: {:.2}", projection.invested_amount)?;
    writeln!(out, "- Net benefit: {:.2}", projection.net_benefit())?;
    writeln!(out, "- ROI: {:.1}%", projection.roi_percent)?;
    Ok(())
}
