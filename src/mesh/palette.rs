use crate::content::TreePart;
use crate::math::Vec3;

fn rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Resting and highlighted surface colors of the woody parts. Leaves are
/// colored per leaf instead.
pub fn wood_colors(part: TreePart) -> (Vec3, Vec3) {
    match part {
        TreePart::Bark => (rgb(0x8B5A2B), rgb(0xA67C52)),
        TreePart::Branches => (rgb(0x6B4423), rgb(0x9B7653)),
        TreePart::Roots => (rgb(0x5D4E37), rgb(0x8B7355)),
        TreePart::Leaves => (rgb(0x228B22), rgb(0x32CD32)),
    }
}

pub fn grass() -> Vec3 {
    rgb(0x2D4A2D)
}

pub fn soil() -> Vec3 {
    rgb(0x3D2817)
}

/// Exposed soil, pre-blended at 70% over the grass
pub fn loose_soil() -> Vec3 {
    rgb(0x4A3828).lerp(&grass(), 0.3)
}

/// Background clear color, also used as the fog color
pub fn sky() -> Vec3 {
    rgb(0x1E3A5F)
}
