pub mod session_repository;

pub use session_repository::{
    require_session, InMemorySessionRepository, SessionHandle, SessionRepository,
};
