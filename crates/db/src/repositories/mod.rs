pub mod attendance_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use user_repo::UserRepo;
