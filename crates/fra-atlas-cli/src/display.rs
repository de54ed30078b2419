//! Vertical card display for FRA Atlas records.
//!
//! Renders claims, scan results, recommendations and the dashboard
//! summary as grouped, human-readable cards.

use fra_atlas_core::{Claim, OcrResult, PolicyRecommendation};
use fra_atlas_query::DashboardSummary;

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<22} {}", label, value);
}

/// Print a single claim as a vertical card.
pub fn print_claim_card(claim: &Claim) {
    println!("=== {} ===", claim.id);
    println!();

    println!("Location");
    field("village", &claim.village_name);
    field("district", &claim.district);
    field("state", claim.state.as_str());
    field(
        "coordinates",
        format!(
            "{}, {}",
            claim.coordinates.latitude, claim.coordinates.longitude
        ),
    );
    println!();

    println!("Claim");
    field("holder", &claim.holder_name);
    field("type", claim.claim_type.as_str());
    field("status", claim.status.as_str());
    field("area (ha)", claim.area_hectares);
    println!();

    println!("Dates");
    field("submitted", &claim.submission_date);
    if let Some(date) = &claim.verification_date {
        field("verified", date);
    }
    if let Some(date) = &claim.grant_date {
        field("granted", date);
    }
    println!();

    if !claim.documents.is_empty() {
        println!("Documents");
        field("files", claim.documents.join(", "));
        println!();
    }
}

/// Print one simulated scan result.
pub fn print_scan_card(result: &OcrResult) {
    println!("=== scan (confidence {:.2}) ===", result.confidence);
    println!();

    println!("Extracted text");
    for line in result.extracted_text.lines() {
        println!("  {line}");
    }
    println!();

    println!("Entities");
    let entities = &result.entities;
    if let Some(v) = &entities.village_name {
        field("village", v);
    }
    if let Some(v) = &entities.holder_name {
        field("holder", v);
    }
    if let Some(v) = &entities.coordinates {
        field("coordinates", v);
    }
    if let Some(v) = &entities.claim_type {
        field("claim type", v);
    }
    if let Some(v) = &entities.status {
        field("status", v);
    }
    println!();
}

/// Print one scheme recommendation.
pub fn print_recommendation_card(rec: &PolicyRecommendation) {
    println!("=== {} ===", rec.id);
    println!();

    println!("Recommendation");
    field("village", &rec.village_name);
    field("scheme", rec.recommendation_type.as_str());
    field("priority", rec.priority.as_str());
    field("generated", &rec.generated_date);
    println!();

    println!("Rationale");
    field("reasoning", &rec.reasoning);
    field("estimated benefit", &rec.estimated_benefit);
    println!();

    println!("Implementation steps");
    for (i, step) in rec.implementation_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}

/// Print the dashboard summary.
pub fn print_dashboard(summary: &DashboardSummary) {
    println!("=== FRA Atlas Dashboard ===");
    println!();

    println!("Claims");
    field("total", summary.status.total);
    field("pending", summary.status.pending);
    field("verified", summary.status.verified);
    field("granted", summary.status.granted);
    field("rejected", summary.status.rejected);
    field("success rate", format!("{:.1}%", summary.success_rate));
    field("villages covered", summary.villages_covered);
    println!();

    println!("By state");
    for entry in &summary.by_state {
        field(entry.state.as_str(), entry.claims);
    }
    println!();

    println!("By claim type");
    for entry in &summary.by_type {
        field(entry.claim_type.as_str(), entry.count);
    }
    println!();

    println!("Land use");
    for entry in &summary.land_use {
        field(
            entry.land_use_type.as_str(),
            format!(
                "{} assets, {:.1} ha, confidence {:.2}",
                entry.count, entry.area_hectares, entry.mean_confidence
            ),
        );
    }
    println!();
}
