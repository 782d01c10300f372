pub mod allocator;
pub mod planner;
pub mod render;
pub mod requirements;
pub mod types;
