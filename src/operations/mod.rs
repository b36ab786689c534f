mod algebra;
pub mod query;

pub use algebra::{
    add, angle, coincident, distance, divide, dot_product, norm, scale, sub, vector_product,
};
pub use query::{area, Area};
