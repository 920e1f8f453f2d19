pub mod sqlx_security_event_repository_impl;
