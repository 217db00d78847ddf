pub mod controller;
pub mod directory;
pub mod event_log;
pub mod gps;
pub mod jobs;
pub mod state;
