use crate::modules::students::core::{
    decision::{DecideError, Decision},
    events::{StudentEvent, v1::courses_registered::CoursesRegisteredV1},
    intents::StudentIntent,
    registration::{CourseLookup, UnknownCoursePolicy, merge_registration},
    state::StudentState,
};
use crate::modules::students::use_cases::register_courses::command::RegisterCourses;
use std::collections::BTreeSet;

pub fn decide_register_courses(
    state: &StudentState,
    command: RegisterCourses,
    catalog: &impl CourseLookup,
    policy: UnknownCoursePolicy,
) -> Decision {
    let Some(student) = state.student() else {
        return Decision::Rejected {
            reason: DecideError::StudentNotFound,
        };
    };
    let submitted: BTreeSet<String> = command.courses.into_iter().collect();
    if submitted.is_empty() {
        return Decision::Rejected {
            reason: DecideError::NoCoursesSelected,
        };
    }

    let existing = &student.registered_courses;
    let merged = match merge_registration(existing, &submitted, catalog, policy) {
        Ok(merged) => merged,
        Err(e) => {
            return Decision::Rejected {
                reason: DecideError::Registration(e),
            };
        }
    };
    if &merged == existing {
        return Decision::unchanged();
    }

    let payload = CoursesRegisteredV1 {
        reg_number: student.reg_number.clone(),
        added: merged.difference(existing).cloned().collect(),
        registered_courses: merged.into_iter().collect(),
        registered_at: command.registered_at,
    };
    Decision::Accepted {
        events: vec![StudentEvent::CoursesRegisteredV1(payload.clone())],
        intents: vec![StudentIntent::PublishCoursesRegistered { payload }],
    }
}
