pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, NewCategory};
pub use repository::CategoryRepository;
pub use value_objects::{CategoryId, CategoryName, CategorySlug, MediaType};
