//! WebGPU rendering module
//!
//! One forward pass: each frame the simulation state is rebuilt into a
//! single triangle list and drawn with a depth buffer. No meshes are
//! retained between frames.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
