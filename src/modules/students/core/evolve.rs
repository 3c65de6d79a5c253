use crate::modules::students::core::events::StudentEvent;
use crate::modules::students::core::state::{Student, StudentState};

pub fn evolve(state: StudentState, event: StudentEvent) -> StudentState {
    match (state, event) {
        (StudentState::None, StudentEvent::StudentSignedUpV1(e)) => {
            StudentState::Registered(Student {
                reg_number: e.reg_number,
                name: e.name,
                password: e.password,
                email: None,
                contact: None,
                age: None,
                address: None,
                state: None,
                department: e.department,
                course_of_study: e.course_of_study,
                registered_courses: Default::default(),
                signed_up_at: e.signed_up_at,
                updated_at: e.signed_up_at,
                password_reset_requested_at: None,
            })
        }
        (StudentState::Registered(mut student), StudentEvent::CoursesRegisteredV1(e)) => {
            student.registered_courses = e.registered_courses.into_iter().collect();
            student.updated_at = e.registered_at;
            StudentState::Registered(student)
        }
        (StudentState::Registered(mut student), StudentEvent::ProfileUpdatedV1(e)) => {
            if let Some(name) = e.name {
                student.name = name;
            }
            if let Some(department) = e.department {
                student.department = department;
            }
            if let Some(course_of_study) = e.course_of_study {
                student.course_of_study = course_of_study;
            }
            student.email = e.email.or(student.email);
            student.contact = e.contact.or(student.contact);
            student.age = e.age.or(student.age);
            student.address = e.address.or(student.address);
            student.state = e.state.or(student.state);
            student.updated_at = e.updated_at;
            StudentState::Registered(student)
        }
        (StudentState::Registered(mut student), StudentEvent::PasswordResetRequestedV1(e)) => {
            student.password_reset_requested_at = Some(e.requested_at);
            StudentState::Registered(student)
        }
        (state, _) => state,
    }
}
