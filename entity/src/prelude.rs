pub use super::course::Entity as Course;
pub use super::course_project::Entity as CourseProject;
pub use super::delivery::Entity as Delivery;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
