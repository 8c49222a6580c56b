mod engine;
mod gui;

pub use engine::{FieldError, LifeField};
pub use gui::{App, Config};
