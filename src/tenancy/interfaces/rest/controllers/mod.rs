pub mod tenant_context_rest_controller;
