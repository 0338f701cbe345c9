//! PostgreSQL repository implementations for TeamChat entities.

pub mod member;
pub mod presence;

pub use member::MemberRepository;
pub use presence::PresenceRepository;
