pub mod prelude;

pub mod course;
pub mod course_project;
pub mod delivery;
pub mod schedule;
pub mod user;
