//! Mathematical utilities for angle arithmetic

pub mod angles;

pub use angles::{
    acos_deg, asin_deg, cos_deg, normalize_degrees_0_to_360, polynomial, sin_deg, tan_deg,
    wrap_degrees_180,
};
