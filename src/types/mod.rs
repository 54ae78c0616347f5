pub mod package;
pub mod summary;
pub mod workout;
