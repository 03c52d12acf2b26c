mod pipeline;
mod shaders;
mod webgl;

pub use pipeline::{Atmosphere, FrameParams, RenderPipeline};
pub use webgl::{BufferData, WebGLContext};
