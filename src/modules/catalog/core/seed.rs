use crate::modules::catalog::core::course::{
    Course,
    CourseType::{Compulsory, Elective},
    Level::{L100, L200, L300, L400},
    Semester::{First, Second},
};

/// Reference catalog loaded at startup. Upserted by code, so re-seeding is safe.
pub fn default_courses() -> Vec<Course> {
    vec![
        Course::new("CSC101", "Introduction to Computer Science", 3, Compulsory, L100, First),
        Course::new("MTH101", "General Mathematics I", 3, Compulsory, L100, First),
        Course::new("PHY101", "General Physics I", 3, Compulsory, L100, First),
        Course::new("GST101", "Use of English", 2, Compulsory, L100, First),
        Course::new("CHM101", "General Chemistry I", 3, Elective, L100, First),
        Course::new("BIO101", "General Biology I", 3, Elective, L100, First),
        Course::new("CSC102", "Introduction to Programming", 3, Compulsory, L100, Second),
        Course::new("MTH102", "General Mathematics II", 3, Compulsory, L100, Second),
        Course::new("PHY102", "General Physics II", 3, Compulsory, L100, Second),
        Course::new("GST102", "Philosophy and Logic", 2, Compulsory, L100, Second),
        Course::new("CSC201", "Data Structures", 3, Compulsory, L200, First),
        Course::new("CSC203", "Digital Design", 3, Compulsory, L200, First),
        Course::new("MTH201", "Mathematical Methods", 3, Compulsory, L200, First),
        Course::new("STA201", "Statistics for Physical Sciences", 2, Compulsory, L200, First),
        Course::new("GST201", "Nigerian Peoples and Culture", 2, Compulsory, L200, First),
        Course::new("CSC202", "Operating Systems I", 3, Compulsory, L200, Second),
        Course::new("CSC204", "Algorithms", 3, Compulsory, L200, Second),
        Course::new("GST202", "Entrepreneurship", 2, Compulsory, L200, Second),
        Course::new("CSC206", "Assembly Language", 3, Compulsory, L200, Second),
        Course::new("CSC301", "Database Management", 3, Compulsory, L300, First),
        Course::new("CSC303", "Object Oriented Programming", 3, Compulsory, L300, First),
        Course::new("CSC305", "Operating Systems II", 3, Compulsory, L300, First),
        Course::new("CSC307", "Systems Analysis and Design", 3, Compulsory, L300, First),
        Course::new("CSC311", "Operations Research", 3, Elective, L300, First),
        Course::new("CSC302", "Survey of Programming Languages", 3, Compulsory, L300, Second),
        Course::new("CSC304", "Automata Theory", 3, Compulsory, L300, Second),
        Course::new("CSC310", "Numerical Methods", 3, Compulsory, L300, Second),
        Course::new("CSC399", "Industrial Training (SIWES)", 6, Compulsory, L300, Second),
        Course::new("CSC401", "Software Engineering", 3, Compulsory, L400, First),
        Course::new("CSC403", "Computer Graphics", 3, Compulsory, L400, First),
        Course::new("CSC405", "Artificial Intelligence", 3, Compulsory, L400, First),
        Course::new("CSC407", "Compiler Construction", 3, Compulsory, L400, First),
        Course::new("CSC402", "Computer Networks", 3, Compulsory, L400, Second),
        Course::new("CSC404", "Human Computer Interaction", 2, Elective, L400, Second),
        Course::new("CSC499", "Final Year Project", 6, Compulsory, L400, Second),
    ]
}
