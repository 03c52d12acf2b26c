use crate::growth::SegmentId;
use crate::math::{Mat4, Vec3};

/// Simplified hit volume of one generated segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    Sphere { center: Vec3, radius: f32 },
    Capsule { a: Vec3, b: Vec3, radius: f32 },
}

impl PickShape {
    /// Distance along the ray to the nearest hit in front of the origin
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match *self {
            PickShape::Sphere { center, radius } => ray_sphere_intersect(ray, center, radius),
            PickShape::Capsule { a, b, radius } => ray_capsule_intersect(ray, a, b, radius),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    /// Ray through a canvas pixel. `None` if the camera matrices are singular.
    pub fn from_screen(
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view: &Mat4,
        projection: &Mat4,
    ) -> Option<Self> {
        if screen_width <= 0.0 || screen_height <= 0.0 {
            return None;
        }
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let inverse = projection.mul(view).inverse()?;
        let near = inverse.project_point(Vec3::new(ndc_x, ndc_y, -1.0));
        let far = inverse.project_point(Vec3::new(ndc_x, ndc_y, 1.0));
        Some(Self::new(near, far - near))
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction.scale(distance)
    }
}

/// Information about a ray-segment intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    pub segment: SegmentId,
    pub distance: f32,
    pub hit_point: Vec3,
}

/// Ray-based picking over the tree's pick shapes
#[derive(Debug, Default)]
pub struct RayPicker {
    targets: Vec<(SegmentId, PickShape)>,
}

impl RayPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_targets(&mut self, targets: Vec<(SegmentId, PickShape)>) {
        self.targets = targets;
    }

    /// Nearest segment hit by the ray
    pub fn pick(&self, ray: &Ray) -> Option<HitInfo> {
        self.targets
            .iter()
            .filter_map(|(segment, shape)| {
                shape.intersect(ray).map(|distance| HitInfo {
                    segment: *segment,
                    distance,
                    hit_point: ray.at(distance),
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(&ray.direction);
    let c = oc.dot(&oc) - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    [-b - root, -b + root].into_iter().find(|t| *t > 0.0)
}

/// Capsule as the union of a finite cylinder and two end spheres
fn ray_capsule_intersect(ray: &Ray, a: Vec3, b: Vec3, radius: f32) -> Option<f32> {
    let ba = b - a;
    let oa = ray.origin - a;
    let baba = ba.dot(&ba);
    let bard = ba.dot(&ray.direction);
    let baoa = ba.dot(&oa);
    let rdoa = ray.direction.dot(&oa);
    let oaoa = oa.dot(&oa);

    let mut best: Option<f32> = None;
    let mut consider = |t: Option<f32>| {
        if let Some(t) = t {
            if best.map_or(true, |b| t < b) {
                best = Some(t);
            }
        }
    };

    let qa = baba - bard * bard;
    if qa > f32::EPSILON {
        let qb = baba * rdoa - baoa * bard;
        let qc = baba * oaoa - baoa * baoa - radius * radius * baba;
        let h = qb * qb - qa * qc;
        if h >= 0.0 {
            let root = h.sqrt();
            let body = [(-qb - root) / qa, (-qb + root) / qa].into_iter().find(|t| {
                let along = baoa + t * bard;
                *t > 0.0 && along > 0.0 && along < baba
            });
            consider(body);
        }
    }
    consider(ray_sphere_intersect(ray, a, radius));
    consider(ray_sphere_intersect(ray, b, radius));
    best
}
