pub mod color;
pub mod compositor;
pub mod png;
pub mod renderer;
