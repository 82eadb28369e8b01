pub mod applications;
pub mod companies;
pub mod jobs;
pub mod saved_jobs;
