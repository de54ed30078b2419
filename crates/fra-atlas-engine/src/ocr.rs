//! Simulated OCR + NER over uploaded claim forms.
//!
//! One three-second stage, then two canned scan results. No text is read
//! from anywhere; a real OCR backend would replace [`scan_results`] and
//! keep the same job shape.

use std::time::Duration;

use fra_atlas_core::{OcrEntities, OcrResult};

use crate::progress::{Stage, StagedJob};

const OCR_STAGES: [Stage; 1] = [Stage {
    percent: 65,
    label: "Processing documents...",
    delay: Duration::from_secs(3),
}];

/// The OCR pipeline definition.
pub fn ocr_job() -> StagedJob {
    StagedJob::new(OCR_STAGES)
}

/// Canned scan output for the two demo documents.
pub fn scan_results() -> Vec<OcrResult> {
    vec![
        OcrResult {
            extracted_text: "Forest Rights Act Claim Form\nVillage: Kanha Village\nDistrict: \
                             Mandla\nState: Madhya Pradesh\nPatta Holder: Ramesh Kumar\nClaim \
                             Type: Individual Forest Rights (IFR)\nCoordinates: 22.3344°N, \
                             80.6093°E\nArea: 2.5 hectares\nStatus: Under Verification"
                .into(),
            confidence: 0.92,
            entities: OcrEntities {
                village_name: Some("Kanha Village".into()),
                holder_name: Some("Ramesh Kumar".into()),
                coordinates: Some("22.3344°N, 80.6093°E".into()),
                claim_type: Some("IFR".into()),
                status: Some("Under Verification".into()),
            },
        },
        OcrResult {
            extracted_text: "Community Forest Rights Application\nVillage: Agartala \
                             Rural\nDistrict: West Tripura\nState: Tripura\nCommunity \
                             Representative: Biplab Debbarma\nClaim Type: Community Forest \
                             Rights (CFR)\nArea: 15.0 hectares\nSubmission Date: 20/01/2024"
                .into(),
            confidence: 0.87,
            entities: OcrEntities {
                village_name: Some("Agartala Rural".into()),
                holder_name: Some("Biplab Debbarma".into()),
                coordinates: None,
                claim_type: Some("CFR".into()),
                status: Some("Pending".into()),
            },
        },
    ]
}
