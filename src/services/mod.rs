pub mod csv_export;
pub mod mood_service;

pub use mood_service::MoodService;
