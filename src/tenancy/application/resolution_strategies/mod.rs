pub mod claim_resolution_strategy;
pub mod header_resolution_strategy;
pub mod path_resolution_strategy;
pub mod subdomain_resolution_strategy;
