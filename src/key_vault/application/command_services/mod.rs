pub mod key_management_service_impl;
