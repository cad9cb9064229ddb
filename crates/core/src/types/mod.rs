//! Newtype wrappers for domain values.

mod dish;
mod image;
mod price;

pub use dish::{DishName, DishNameError};
pub use image::ImageUrl;
pub use price::{PriceError, PricePolicy, format_rub, parse_display_price};
