use crate::math::{Seed, Vec3};

use super::params::BranchSpec;
use super::segment::TubeSegment;
use super::{keyed, BRANCH_STREAM};

/// Radius of the trunk collar where limbs attach
const COLLAR_RADIUS: f32 = 0.15;
const SUB_BRANCH_POSITIONS: [f32; 2] = [0.4, 0.7];

// salts
const BOW: u64 = 0;
const SPREAD: u64 = 1;
const REACH: u64 = 2;
const RISE: u64 = 3;

/// A main limb and the two sub-branches it carries
#[derive(Debug, Clone, PartialEq)]
pub struct Limb {
    pub main: TubeSegment,
    pub subs: [TubeSegment; 2],
}

impl Limb {
    pub fn segments(&self) -> impl Iterator<Item = &TubeSegment> {
        std::iter::once(&self.main).chain(self.subs.iter())
    }
}

pub fn main_branch(seed: Seed, index: usize, spec: &BranchSpec) -> TubeSegment {
    let bow = keyed(seed, BRANCH_STREAM, index, 0, BOW);
    TubeSegment {
        start: Vec3::on_circle(spec.angle, COLLAR_RADIUS, spec.height),
        end: Vec3::on_circle(spec.angle, spec.length, spec.height + spec.tilt),
        start_radius: 0.08,
        end_radius: 0.03,
        curve_offset: Vec3::new(0.0, 0.15 + bow * 0.1, 0.0),
    }
}

/// Sub-branch `sub` (0 or 1) of limb `index`, growing out of `main`
pub fn sub_branch(seed: Seed, index: usize, sub: usize, spec: &BranchSpec, main: &TubeSegment) -> TubeSegment {
    let key = sub + 1;
    let angle = spec.angle + (keyed(seed, BRANCH_STREAM, index, key, SPREAD) - 0.5);
    let length = 0.35 + keyed(seed, BRANCH_STREAM, index, key, REACH) * 0.2;
    let rise = 0.2 + keyed(seed, BRANCH_STREAM, index, key, RISE) * 0.15;

    let start = main.point_on_chord(SUB_BRANCH_POSITIONS[sub]);
    TubeSegment {
        start,
        end: start + Vec3::on_circle(angle, length, rise),
        start_radius: 0.035,
        end_radius: 0.015,
        curve_offset: Vec3::new(0.0, 0.08, 0.0),
    }
}

pub fn generate_branches(seed: Seed, specs: &[BranchSpec]) -> Vec<Limb> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let main = main_branch(seed, i, spec);
            let subs = [
                sub_branch(seed, i, 0, spec, &main),
                sub_branch(seed, i, 1, spec, &main),
            ];
            Limb { main, subs }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::TreeParams;

    fn limbs(seed: u64) -> Vec<Limb> {
        generate_branches(Seed::new(seed), &TreeParams::default().main_branches)
    }

    #[test]
    fn test_five_limbs_fifteen_segments() {
        let limbs = limbs(0);
        assert_eq!(limbs.len(), 5);
        assert_eq!(limbs.iter().flat_map(|l| l.segments()).count(), 15);
    }

    #[test]
    fn test_main_endpoints_follow_descriptor() {
        let spec = BranchSpec { height: 1.8, angle: 0.4, length: 1.1, tilt: 0.5 };
        let main = main_branch(Seed::new(0), 0, &spec);
        assert!((main.start.x - 0.4f32.cos() * 0.15).abs() < 1e-6);
        assert!((main.start.y - 1.8).abs() < 1e-6);
        assert!((main.end.y - 2.3).abs() < 1e-6);
        assert!((main.end.z - 0.4f32.sin() * 1.1).abs() < 1e-6);
        assert!(main.curve_offset.y >= 0.15 && main.curve_offset.y < 0.25);
    }

    #[test]
    fn test_sub_branches_start_on_main() {
        for limb in limbs(3) {
            let first = limb.main.point_on_chord(0.4);
            let second = limb.main.point_on_chord(0.7);
            assert!(limb.subs[0].start.distance(&first) < 1e-6);
            assert!(limb.subs[1].start.distance(&second) < 1e-6);
            for sub in &limb.subs {
                let rise = sub.end.y - sub.start.y;
                assert!(rise > 0.2 - 1e-5 && rise < 0.35 + 1e-5);
                let reach = Vec3::new(sub.end.x - sub.start.x, 0.0, sub.end.z - sub.start.z).length();
                assert!(reach >= 0.35 - 1e-5 && reach < 0.55 + 1e-5);
            }
        }
    }

    #[test]
    fn test_deterministic_and_seed_sensitive() {
        assert_eq!(limbs(11), limbs(11));
        assert_ne!(limbs(11), limbs(12));
    }

    #[test]
    fn test_sub_branch_keys_are_isolated() {
        // Limb 0's second sub-branch must not share draws with limb 1's bow
        let limbs = limbs(0);
        let a = limbs[0].subs[1].end - limbs[0].subs[1].start;
        let b = limbs[1].subs[0].end - limbs[1].subs[0].start;
        assert_ne!(a, b);
    }

    #[test]
    fn test_limbs_do_not_depend_on_other_descriptors() {
        let seed = Seed::new(4);
        let mut specs = TreeParams::default().main_branches;
        let baseline = generate_branches(seed, &specs);

        specs[1].angle += 1.0;
        specs[1].length = 0.5;
        let edited = generate_branches(seed, &specs);
        assert_eq!(edited[0], baseline[0]);
        assert_eq!(&edited[2..], &baseline[2..]);

        specs.pop();
        let shorter = generate_branches(seed, &specs);
        assert_eq!(shorter.len(), 4);
        assert_eq!(shorter[0], baseline[0]);
        assert_eq!(shorter[3], baseline[3]);
    }
}
