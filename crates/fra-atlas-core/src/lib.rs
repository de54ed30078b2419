pub mod geo;
pub mod mock;
pub mod types;

pub use mock::Dataset;
pub use types::{
    Asset, Claim, ClaimStatus, ClaimType, Coordinates, LandUseType, OcrEntities, OcrResult,
    PolicyRecommendation, Priority, Scheme, State, Village,
};
