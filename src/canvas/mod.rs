pub mod background;
pub mod particle;
pub mod renderer;
pub mod shapes;
pub mod surface;
