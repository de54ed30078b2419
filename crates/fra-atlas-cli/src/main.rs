//! `fra-atlas` command-line interface.

mod display;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use fra_atlas_core::{ClaimStatus, ClaimType, Dataset, State};
use fra_atlas_engine::{
    JobHandle, PipelineState, generated_recommendations, ocr_job, recommendation_job, satellite_job,
    scan_results,
};
use fra_atlas_export::{
    ClaimRow, RecommendationRow, assets_to_geojson, claims_to_geojson, to_csv, to_json,
};
use fra_atlas_query::{ClaimFilter, DashboardSummary};
use fra_atlas_server::call::{BlandDispatcher, CallConfig, CallDispatcher};
use fra_atlas_server::config::ServerConfig;
use fra_atlas_server::{AppState, router};

#[derive(Parser)]
#[command(name = "fra-atlas", version, about = "FRA Atlas demo toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve {
        #[arg(long, env = "FRA_ATLAS_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
        /// Credential for the outbound call API.
        #[arg(long, env = "BLAND_API_KEY", hide_env_values = true)]
        bland_api_key: Option<String>,
    },
    /// Print the dashboard summary.
    Stats,
    /// List claims, optionally filtered.
    Claims {
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        village: Option<String>,
        /// May be given more than once, e.g. `--claim-type IFR --claim-type CR`.
        #[arg(long = "claim-type")]
        claim_type: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
        /// Case-insensitive search over holder and village names.
        #[arg(long)]
        search: Option<String>,
    },
    /// Write an export file for claims, assets, or recommendations.
    Export {
        /// `claims`, `assets`, or `recommendations`.
        entity: String,
        /// `geojson`, `json`, or `csv`; defaults per entity.
        #[arg(long)]
        format: Option<String>,
        /// Output path; defaults to the entity's standard filename.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the simulated document scan.
    Ocr,
    /// Run the simulated satellite land-use analysis.
    Analyze,
    /// Run the simulated decision-support analysis.
    Recommend,
    /// Trigger an outbound helpline call to the given number.
    Call {
        number: String,
        #[arg(long, env = "BLAND_API_KEY", hide_env_values = true)]
        bland_api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            bind,
            bland_api_key,
        } => serve(ServerConfig { bind, bland_api_key }).await,
        Command::Stats => {
            let data = Dataset::mock();
            let summary = DashboardSummary::compute(&data.claims, &data.assets, data.villages.len());
            display::print_dashboard(&summary);
            Ok(())
        }
        Command::Claims {
            state,
            district,
            village,
            claim_type,
            status,
            search,
        } => {
            let filter = build_filter(state, district, village, claim_type, status, search)?;
            let data = Dataset::mock();
            let claims = filter.apply(&data.claims);
            for claim in &claims {
                display::print_claim_card(claim);
            }
            println!("{} claim(s)", claims.len());
            Ok(())
        }
        Command::Export {
            entity,
            format,
            out,
        } => export(&entity, format.as_deref(), out),
        Command::Ocr => {
            let results = run_with_progress(ocr_job().spawn(scan_results)).await?;
            for result in &results {
                display::print_scan_card(result);
            }
            Ok(())
        }
        Command::Analyze => {
            let data = Dataset::mock();
            let assets = data.assets.clone();
            let classified = run_with_progress(satellite_job().spawn(move || assets)).await?;
            let breakdown = fra_atlas_query::land_use_breakdown(&classified);
            println!();
            for class in &breakdown {
                println!(
                    "  {:<14} {} assets, {:.1} ha, confidence {:.2}",
                    class.land_use_type.as_str(),
                    class.count,
                    class.area_hectares,
                    class.mean_confidence
                );
            }
            Ok(())
        }
        Command::Recommend => {
            let recs =
                run_with_progress(recommendation_job().spawn(generated_recommendations)).await?;
            println!();
            for rec in &recs {
                display::print_recommendation_card(rec);
            }
            Ok(())
        }
        Command::Call {
            number,
            bland_api_key,
        } => call(number, bland_api_key).await,
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let dispatcher = Arc::new(BlandDispatcher::new(config.bland_api_key));
    let state = AppState::new(Dataset::mock(), dispatcher);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "fra-atlas listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_filter(
    state: Option<String>,
    district: Option<String>,
    village: Option<String>,
    claim_types: Vec<String>,
    statuses: Vec<String>,
    search: Option<String>,
) -> anyhow::Result<ClaimFilter> {
    let state = match state {
        Some(s) => Some(State::parse(&s).with_context(|| format!("unknown state: {s}"))?),
        None => None,
    };
    let claim_types = claim_types
        .iter()
        .map(|t| ClaimType::parse(t).with_context(|| format!("unknown claim type: {t}")))
        .collect::<anyhow::Result<_>>()?;
    let statuses = statuses
        .iter()
        .map(|s| ClaimStatus::parse(s).with_context(|| format!("unknown status: {s}")))
        .collect::<anyhow::Result<_>>()?;
    Ok(ClaimFilter {
        state,
        district,
        village,
        claim_types,
        statuses,
        search: search.unwrap_or_default(),
    })
}

fn export(entity: &str, format: Option<&str>, out: Option<PathBuf>) -> anyhow::Result<()> {
    let data = Dataset::mock();
    let (body, default_name) = match entity {
        "claims" => {
            let claims: Vec<&_> = data.claims.iter().collect();
            match format.unwrap_or("geojson") {
                "geojson" => (
                    claims_to_geojson(&claims)?.to_string_pretty()?,
                    "fra_claims_data.geojson",
                ),
                "json" => {
                    let rows: Vec<ClaimRow> = claims.iter().map(|c| ClaimRow::from(*c)).collect();
                    (to_json(&rows)?, "fra_claims_data.json")
                }
                "csv" => {
                    let rows: Vec<ClaimRow> = claims.iter().map(|c| ClaimRow::from(*c)).collect();
                    (to_csv(&rows), "fra_claims_data.csv")
                }
                other => bail!("unsupported claims format: {other}"),
            }
        }
        "assets" => {
            let assets: Vec<&_> = data.assets.iter().collect();
            match format.unwrap_or("geojson") {
                "geojson" => (
                    assets_to_geojson(&assets)?.to_string_pretty()?,
                    "asset_mapping_data.geojson",
                ),
                "json" => (to_json(&data.assets)?, "asset_mapping_data.json"),
                other => bail!("unsupported assets format: {other}"),
            }
        }
        "recommendations" => match format.unwrap_or("json") {
            "json" => (
                to_json(&data.recommendations)?,
                "policy_recommendations.json",
            ),
            "csv" => {
                let rows: Vec<RecommendationRow> = data
                    .recommendations
                    .iter()
                    .map(RecommendationRow::from)
                    .collect();
                (to_csv(&rows), "policy_recommendations.csv")
            }
            other => bail!("unsupported recommendations format: {other}"),
        },
        other => bail!("unknown export entity: {other}"),
    };

    let path = out.unwrap_or_else(|| PathBuf::from(default_name));
    std::fs::write(&path, &body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {} ({} bytes)", path.display(), body.len());
    Ok(())
}

/// Print stage progress as it is published, then hand back the result.
async fn run_with_progress<T>(handle: JobHandle<T>) -> anyhow::Result<T> {
    let mut rx = handle.watch();
    loop {
        if rx.changed().await.is_err() {
            break;
        }
        match *rx.borrow() {
            PipelineState::Running { percent, label } => println!("[{percent:>3}%] {label}"),
            PipelineState::Done => break,
            PipelineState::Idle => {}
        }
    }
    handle
        .join()
        .await?
        .context("pipeline was cancelled before finishing")
}

async fn call(number: String, api_key: Option<String>) -> anyhow::Result<()> {
    if api_key.is_none() {
        bail!("BLAND_API_KEY is not set");
    }
    let dispatcher = BlandDispatcher::new(api_key);
    let response = dispatcher
        .dispatch(&CallConfig::for_number(number))
        .await
        .context("call dispatch failed")?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
