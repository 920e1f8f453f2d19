pub mod tenant_registration;
