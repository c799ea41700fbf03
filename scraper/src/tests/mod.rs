pub mod fixtures;
pub mod profile_tests;
