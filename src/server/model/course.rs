//! Course domain model.

/// A course groups the projects of one semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i32,
    pub semester: String,
    pub course_name: String,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            semester: entity.semester,
            course_name: entity.course_name,
        }
    }
}
