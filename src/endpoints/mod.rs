pub mod submit;
pub mod team;
