pub mod entities;
pub mod physics;
pub mod renderer;
pub mod scheduler;
