pub mod auth;
pub mod catalog;
pub mod enroll;
pub mod onboarding;
pub mod pages;
pub mod user;
