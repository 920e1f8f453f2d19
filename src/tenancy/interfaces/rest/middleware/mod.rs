pub mod tenant_resolution_layer;
