use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::math::{Mat4, Vec3};

/// Camera rig settings. Every field has a default, so a config only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub target: Vec3,
    pub position: Vec3,
    pub fov_degrees: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub auto_rotate: bool,
    /// 1.0 is one turn per minute
    pub auto_rotate_speed: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            target: Vec3::new(0.0, 0.8, 0.0),
            position: Vec3::new(5.0, 2.5, 5.0),
            fov_degrees: 42.0,
            min_polar: PI / 8.0,
            max_polar: PI / 1.6,
            min_distance: 4.0,
            max_distance: 14.0,
            damping: 0.05,
            auto_rotate: true,
            auto_rotate_speed: 0.6,
        }
    }
}

/// Damped orbit around a fixed target. Pan is not supported.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    config: OrbitConfig,
    azimuth: f32,
    polar: f32,
    distance: f32,
    /// Pending rotation, drained a damping fraction per update
    delta_azimuth: f32,
    delta_polar: f32,
    auto_rotate: bool,
}

impl OrbitCamera {
    pub fn new(config: OrbitConfig) -> Self {
        let offset = config.position - config.target;
        let distance = offset.length().max(f32::EPSILON);
        let mut camera = Self {
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            auto_rotate: config.auto_rotate,
            config,
        };
        camera.clamp();
        camera
    }

    /// Queue a drag rotation in radians
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.delta_azimuth += d_azimuth;
        self.delta_polar += d_polar;
    }

    /// Multiply the distance by `factor` (< 1 zooms in)
    pub fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.distance *= factor;
            self.clamp();
        }
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Ignored unless `0 < min <= max`
    pub fn set_distance_bounds(&mut self, min: f32, max: f32) {
        if min > 0.0 && min <= max {
            self.config.min_distance = min;
            self.config.max_distance = max;
            self.clamp();
        }
    }

    pub fn distance_bounds(&self) -> (f32, f32) {
        (self.config.min_distance, self.config.max_distance)
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.delta_azimuth -= TAU / 60.0 * self.config.auto_rotate_speed * dt.max(0.0);
        }

        let damping = self.config.damping.clamp(0.0, 1.0);
        if damping > 0.0 {
            self.azimuth += self.delta_azimuth * damping;
            self.polar += self.delta_polar * damping;
            self.delta_azimuth *= 1.0 - damping;
            self.delta_polar *= 1.0 - damping;
        } else {
            self.azimuth += self.delta_azimuth;
            self.polar += self.delta_polar;
            self.delta_azimuth = 0.0;
            self.delta_polar = 0.0;
        }
        self.azimuth = self.azimuth.rem_euclid(TAU);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.polar = self.polar.clamp(self.config.min_polar, self.config.max_polar);
        self.distance = self.distance.clamp(self.config.min_distance, self.config.max_distance);
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.config.target
            + Vec3::new(
                self.distance * sin_polar * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * sin_polar * self.azimuth.cos(),
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye(), self.config.target, Vec3::UP)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.config.fov_degrees.to_radians(), aspect.max(f32::EPSILON), 0.1, 100.0)
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.config.target
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}
