pub mod companies;
pub mod jobs;
pub mod probes;
pub mod saved_jobs;
