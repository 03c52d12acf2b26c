//! Wind sway of the foliage. The vertex shader evaluates the motion; this
//! side owns the speeds and amplitudes and packs them as uniforms.

/// Angular speeds (rad/s) and amplitudes (rad) of the two sway motions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayParams {
    pub leaf_speed: f32,
    pub leaf_amplitude: f32,
    /// Cluster tilt about X, driven by the anchor's z
    pub cluster_x_speed: f32,
    pub cluster_x_amplitude: f32,
    /// Cluster turn about Y, driven by the anchor's x
    pub cluster_y_speed: f32,
    pub cluster_y_amplitude: f32,
}

impl Default for SwayParams {
    fn default() -> Self {
        Self {
            leaf_speed: 1.5,
            leaf_amplitude: 0.08,
            cluster_x_speed: 0.4,
            cluster_x_amplitude: 0.02,
            cluster_y_speed: 0.3,
            cluster_y_amplitude: 0.03,
        }
    }
}

impl SwayParams {
    /// Packed as the shader's `u_leaf_sway` and `u_cluster_sway` uniforms
    pub fn uniforms(&self) -> ([f32; 2], [f32; 4]) {
        (
            [self.leaf_speed, self.leaf_amplitude],
            [
                self.cluster_x_speed,
                self.cluster_x_amplitude,
                self.cluster_y_speed,
                self.cluster_y_amplitude,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_motions_are_gentle() {
        let sway = SwayParams::default();
        // amplitudes are radians; all stay under a few degrees
        for amplitude in [sway.leaf_amplitude, sway.cluster_x_amplitude, sway.cluster_y_amplitude] {
            assert!(amplitude > 0.0 && amplitude < 0.1);
        }
        assert!(sway.leaf_speed > sway.cluster_x_speed);
    }

    #[test]
    fn test_uniform_packing() {
        let (leaf, cluster) = SwayParams::default().uniforms();
        assert_eq!(leaf, [1.5, 0.08]);
        assert_eq!(cluster, [0.4, 0.02, 0.3, 0.03]);
    }
}
