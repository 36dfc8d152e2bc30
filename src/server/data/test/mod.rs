mod course;
mod course_project;
mod schedule;
mod user;
