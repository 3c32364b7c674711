pub mod content_service;
pub mod http_helpers;
pub mod session_controller;
pub mod text_generation;
