//! Demo parcel-boundary rendering.
//!
//! The portal draws a rough polygon around each claim so parcels read as
//! areas rather than points. The ring is randomized around the centroid at
//! a radius derived from the claimed area. This is presentation only; no
//! survey geometry exists in the system and none should be inferred from
//! these rings.

use rand::Rng;

use crate::types::Coordinates;

/// Vertices in the generated ring.
const BOUNDARY_POINTS: usize = 8;

/// Degrees of latitude per kilometre.
const KM_PER_DEGREE: f64 = 111.0;

/// Generate a closed-ish ring of `[latitude, longitude]` points around
/// `center`, sized so a circle of the claimed area roughly fits inside.
///
/// Radius: `sqrt(area_ha / π) / 100` km converted to degrees, with each
/// vertex pushed out by a random factor drawn from `[0.3, 1.0)`.
pub fn parcel_boundary<R: Rng>(
    center: Coordinates,
    area_hectares: f64,
    rng: &mut R,
) -> Vec<[f64; 2]> {
    let radius_km = (area_hectares / std::f64::consts::PI).sqrt() / 100.0;
    let radius_deg = radius_km / KM_PER_DEGREE;

    (0..BOUNDARY_POINTS)
        .map(|i| {
            let angle = (i as f64 / BOUNDARY_POINTS as f64) * std::f64::consts::TAU;
            let variation = rng.gen_range(0.3..1.0);
            let latitude = center.latitude + radius_deg * variation * angle.cos();
            let longitude = center.longitude + radius_deg * variation * angle.sin();
            [latitude, longitude]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CENTER: Coordinates = Coordinates {
        latitude: 22.3344,
        longitude: 80.6093,
    };

    #[test]
    fn ring_has_eight_points() {
        let mut rng = StdRng::seed_from_u64(7);
        let ring = parcel_boundary(CENTER, 2.5, &mut rng);
        assert_eq!(ring.len(), BOUNDARY_POINTS);
    }

    #[test]
    fn points_stay_within_max_radius() {
        let mut rng = StdRng::seed_from_u64(7);
        let area = 15.0;
        let max_deg = (area / std::f64::consts::PI).sqrt() / 100.0 / KM_PER_DEGREE;
        for [lat, lon] in parcel_boundary(CENTER, area, &mut rng) {
            let dist = ((lat - CENTER.latitude).powi(2) + (lon - CENTER.longitude).powi(2)).sqrt();
            assert!(dist <= max_deg + 1e-12);
            assert!(dist >= 0.3 * max_deg - 1e-12);
        }
    }

    #[test]
    fn zero_area_collapses_to_center() {
        let mut rng = StdRng::seed_from_u64(7);
        for [lat, lon] in parcel_boundary(CENTER, 0.0, &mut rng) {
            assert_eq!(lat, CENTER.latitude);
            assert_eq!(lon, CENTER.longitude);
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let a = parcel_boundary(CENTER, 8.2, &mut StdRng::seed_from_u64(42));
        let b = parcel_boundary(CENTER, 8.2, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
