pub mod interactive;
pub mod render;
pub mod walk;

pub use interactive::browse;
pub use render::DEFAULT_STYLE;
pub use walk::walk;
