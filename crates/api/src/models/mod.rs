//! Domain models for persisted entities.

pub mod category;
pub mod product;
pub mod user;

pub use category::Category;
pub use product::{NewProduct, Product};
pub use user::User;
