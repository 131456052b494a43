//! In-memory Repository Implementations

mod team_repository;

pub use team_repository::InMemoryTeamRepository;
