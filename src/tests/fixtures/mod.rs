pub mod app;
pub mod catalog;

pub mod commands {
    pub mod register_courses;
    pub mod sign_up;
}

pub mod events {
    pub mod student_signed_up_v1;
}
