pub mod passes;
pub mod renderer;
pub mod transform;
