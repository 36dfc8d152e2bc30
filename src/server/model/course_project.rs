//! Course project domain model.

/// A student project belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProject {
    pub id: i32,
    pub project_name: String,
    pub course_name: String,
}

impl CourseProject {
    pub fn from_entity(entity: entity::course_project::Model) -> Self {
        Self {
            id: entity.id,
            project_name: entity.project_name,
            course_name: entity.course_name,
        }
    }
}
