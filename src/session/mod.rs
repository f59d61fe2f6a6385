pub mod clock;
pub mod mood_session;
