pub mod member;
pub mod submission;
