pub mod session_helpers;
