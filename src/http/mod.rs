pub mod cors;
pub mod error;
pub mod health;
pub mod media;
pub mod player_logs;
pub mod players;
pub mod routes;
pub mod settings;
pub mod week_plans;
