pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod i18n;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;

#[cfg(test)]
mod test_utils;
