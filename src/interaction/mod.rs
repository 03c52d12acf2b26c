mod hover;
mod orbit;
mod picking;

pub use hover::{PointerEvent, PointerKind, PointerTracker, SelectionCallback, Transition, TreeInteraction};
pub use orbit::{OrbitCamera, OrbitConfig};
pub use picking::{HitInfo, PickShape, Ray, RayPicker};
