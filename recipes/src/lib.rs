pub mod ids;

pub mod error;

pub mod nutrition;

pub mod author;
pub mod category;
pub mod recipe;

pub mod review;

pub mod favourite;
pub mod user;

pub mod date;

pub mod csv_reader;

pub mod catalog;

pub use author::Author;
pub use catalog::Catalog;
pub use category::Category;
pub use error::DomainError;
pub use favourite::Favourite;
pub use ids::{AuthorId, CategoryId, RecipeId, UserId};
pub use nutrition::Nutrition;
pub use recipe::Recipe;
pub use review::Review;
pub use user::User;
