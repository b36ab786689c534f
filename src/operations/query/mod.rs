mod area;

pub use area::{area, Area};
