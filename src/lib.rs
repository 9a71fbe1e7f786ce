//! Persistence and REST layer for the training tracker: players, week plans,
//! exercise media, player logs and app settings in one SQLite file.

pub mod config;
pub mod db;
pub mod http;
pub mod ids;
