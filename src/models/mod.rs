pub mod action;
pub mod buttons;
pub mod employee;
pub mod job;
pub mod location;
pub mod payload;
pub mod session_state;
pub mod status;
