//! Trunk profile: a tapered, bumpy radius curve that gets lathed around Y.

/// Height of the trunk base (ground level)
pub const TRUNK_BASE_Y: f32 = -1.5;
pub const TRUNK_HEIGHT: f32 = 4.0;
const BASE_RADIUS: f32 = 0.4;
const TAPER: f32 = 0.7;
const MIN_RADIUS: f32 = 0.08;

/// One sampled station of the profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub radius: f32,
    pub y: f32,
}

/// Radius at `station` of `intervals`: base taper plus two sinusoidal
/// bumps, never thinner than the minimum.
pub fn trunk_radius(station: usize, intervals: usize) -> f32 {
    let t = station as f32 / intervals.max(1) as f32;
    let radius = BASE_RADIUS * (1.0 - t * TAPER) + (t * 8.0).sin() * 0.03 + (t * 15.0).sin() * 0.015;
    radius.max(MIN_RADIUS)
}

pub fn station_height(station: usize, intervals: usize) -> f32 {
    let t = station as f32 / intervals.max(1) as f32;
    TRUNK_BASE_Y + t * TRUNK_HEIGHT
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrunkProfile {
    pub points: Vec<ProfilePoint>,
}

impl TrunkProfile {
    pub fn generate(intervals: usize) -> Self {
        let intervals = intervals.max(1);
        let points = (0..=intervals)
            .map(|i| ProfilePoint {
                radius: trunk_radius(i, intervals),
                y: station_height(i, intervals),
            })
            .collect();
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_bit_identical() {
        for i in 0..=20 {
            assert_eq!(trunk_radius(i, 20).to_bits(), trunk_radius(i, 20).to_bits());
        }
    }

    #[test]
    fn test_base_radius() {
        // sin(0) terms vanish at the base
        assert!((trunk_radius(0, 20) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_floor_and_taper() {
        let profile = TrunkProfile::generate(20);
        assert_eq!(profile.points.len(), 21);
        assert!(profile.points.iter().all(|p| p.radius >= 0.08));
        assert!(profile.points[20].radius < profile.points[0].radius);
    }

    #[test]
    fn test_height_span() {
        let profile = TrunkProfile::generate(20);
        assert!((profile.points[0].y + 1.5).abs() < 1e-6);
        assert!((profile.points[20].y - 2.5).abs() < 1e-5);
    }
}
