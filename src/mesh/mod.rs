mod buffer;
pub mod palette;
mod scene;
mod shapes;

pub use buffer::{Mesh, Vertex, VertexStyle, GROUND_SLOT, VERTEX_FLOATS};
pub use scene::{MeshParams, PartMeshInfo, SceneBuilder, TreeScene};
pub use shapes::{append_annulus, append_lathe, append_leaf, append_tube, connect_rings, create_ring, leaf_outline};
