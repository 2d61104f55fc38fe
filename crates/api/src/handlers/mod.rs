pub mod exercises;
pub mod pages;
pub mod workout;
