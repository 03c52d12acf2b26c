use std::f32::consts::TAU;

use crate::math::{Seed, Vec3};

use super::segment::TubeSegment;
use super::trunk::TRUNK_BASE_Y;
use super::{keyed, ROOT_STREAM};

const SECONDARY_POSITIONS: [f32; 2] = [0.3, 0.6];

// salts
const JITTER: u64 = 0;
const REACH: u64 = 1;
const DEPTH: u64 = 2;
const GIRTH: u64 = 3;
const SPREAD: u64 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub primary: TubeSegment,
    pub secondaries: [TubeSegment; 2],
}

impl Root {
    pub fn segments(&self) -> impl Iterator<Item = &TubeSegment> {
        std::iter::once(&self.primary).chain(self.secondaries.iter())
    }
}

fn primary(seed: Seed, index: usize, count: usize) -> (TubeSegment, f32) {
    let angle = index as f32 / count as f32 * TAU + keyed(seed, ROOT_STREAM, index, 0, JITTER) * 0.3;
    let length = 0.8 + keyed(seed, ROOT_STREAM, index, 0, REACH) * 0.6;
    let depth = -2.3 - keyed(seed, ROOT_STREAM, index, 0, DEPTH) * 0.4;
    let radius = 0.06 + keyed(seed, ROOT_STREAM, index, 0, GIRTH) * 0.03;

    let segment = TubeSegment {
        start: Vec3::new(0.0, TRUNK_BASE_Y, 0.0),
        end: Vec3::on_circle(angle, length, depth),
        start_radius: radius,
        end_radius: radius * 0.5,
        curve_offset: Vec3::new(0.0, -0.1, 0.0),
    };
    (segment, angle)
}

fn secondary(seed: Seed, index: usize, sub: usize, angle: f32, primary: &TubeSegment) -> TubeSegment {
    let key = sub + 1;
    let angle = angle + (keyed(seed, ROOT_STREAM, index, key, SPREAD) - 0.5) * 0.8;
    let length = 0.3 + keyed(seed, ROOT_STREAM, index, key, REACH) * 0.3;
    let drop = 0.3 + keyed(seed, ROOT_STREAM, index, key, DEPTH) * 0.2;
    let radius = 0.02 + keyed(seed, ROOT_STREAM, index, key, GIRTH) * 0.015;

    let start = primary.point_on_chord(SECONDARY_POSITIONS[sub]);
    TubeSegment {
        start,
        end: start + Vec3::on_circle(angle, length, -drop),
        start_radius: radius,
        end_radius: radius * 0.5,
        curve_offset: Vec3::new(0.0, -0.1, 0.0),
    }
}

/// `count` primary roots spread evenly around the trunk base, two
/// secondaries each
pub fn generate_roots(seed: Seed, count: usize) -> Vec<Root> {
    (0..count)
        .map(|i| {
            let (primary, angle) = primary(seed, i, count);
            let secondaries = [
                secondary(seed, i, 0, angle, &primary),
                secondary(seed, i, 1, angle, &primary),
            ];
            Root { primary, secondaries }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let roots = generate_roots(Seed::new(0), 6);
        assert_eq!(roots.len(), 6);
        assert_eq!(roots.iter().flat_map(|r| r.segments()).count(), 18);
    }

    #[test]
    fn test_primary_ranges() {
        for root in generate_roots(Seed::new(5), 6) {
            let p = root.primary;
            assert_eq!(p.start, Vec3::new(0.0, -1.5, 0.0));
            assert!(p.end.y <= -2.3 && p.end.y > -2.7);
            let reach = Vec3::new(p.end.x, 0.0, p.end.z).length();
            assert!(reach >= 0.8 - 1e-5 && reach < 1.4 + 1e-5);
            assert!(p.start_radius >= 0.06 && p.start_radius < 0.09);
        }
    }

    #[test]
    fn test_secondaries_descend_from_primary() {
        for root in generate_roots(Seed::new(5), 6) {
            for (sub, t) in root.secondaries.iter().zip([0.3, 0.6]) {
                assert!(sub.start.distance(&root.primary.point_on_chord(t)) < 1e-6);
                let drop = sub.start.y - sub.end.y;
                assert!(drop > 0.3 - 1e-5 && drop < 0.5 + 1e-5);
                assert!(sub.start_radius >= 0.02 && sub.start_radius < 0.035);
            }
        }
    }

    #[test]
    fn test_zero_roots() {
        assert!(generate_roots(Seed::new(0), 0).is_empty());
    }

    fn heading(from: Vec3, to: Vec3) -> f32 {
        (to.z - from.z).atan2(to.x - from.x)
    }

    fn same_angle(a: f32, b: f32) -> bool {
        let d = (a - b).rem_euclid(TAU);
        d < 1e-4 || d > TAU - 1e-4
    }

    #[test]
    fn test_draws_do_not_depend_on_root_count() {
        let seed = Seed::new(8);
        let six = generate_roots(seed, 6);
        let eight = generate_roots(seed, 8);

        for (i, (a, b)) in six.iter().zip(&eight).enumerate() {
            // only the even spacing differs between the two counts
            let jitter = |root: &Root, count: usize| {
                heading(root.primary.start, root.primary.end) - i as f32 / count as f32 * TAU
            };
            assert!(same_angle(jitter(a, 6), jitter(b, 8)));
            assert_eq!(a.primary.end.y, b.primary.end.y);
            assert_eq!(a.primary.start_radius, b.primary.start_radius);
            let reach = |s: &TubeSegment| Vec3::new(s.end.x - s.start.x, 0.0, s.end.z - s.start.z).length();
            assert!((reach(&a.primary) - reach(&b.primary)).abs() < 1e-5);

            for (sa, sb) in a.secondaries.iter().zip(&b.secondaries) {
                assert_eq!(sa.start_radius, sb.start_radius);
                assert!(((sa.start.y - sa.end.y) - (sb.start.y - sb.end.y)).abs() < 1e-5);
                assert!((reach(sa) - reach(sb)).abs() < 1e-5);
                let spread = |s: &TubeSegment, root: &Root| {
                    heading(s.start, s.end) - heading(root.primary.start, root.primary.end)
                };
                assert!(same_angle(spread(sa, a), spread(sb, b)));
            }
        }
    }
}
