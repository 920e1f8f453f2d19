pub mod context_services;
pub mod resolution_strategies;
pub mod resolver_services;
