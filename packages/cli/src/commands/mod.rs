pub mod check;
pub mod inspect;
pub mod new;
pub mod render;
pub mod templates;

pub use check::{check, CheckArgs};
pub use inspect::{inspect, InspectArgs};
pub use new::{new, NewArgs};
pub use render::{render, RenderArgs};
pub use templates::{templates, TemplatesArgs};
