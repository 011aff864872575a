//! Application services.

mod standings_service;

pub use standings_service::StandingsService;
