pub mod pattern;
pub mod rows;
pub mod schema;

pub use pattern::*;
pub use rows::*;
pub use schema::*;
