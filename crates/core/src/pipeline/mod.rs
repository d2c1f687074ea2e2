pub mod capture_session;
pub mod session_logger;
