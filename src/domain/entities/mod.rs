pub mod movie;
pub mod sort;
