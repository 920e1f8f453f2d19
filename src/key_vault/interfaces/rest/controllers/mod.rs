pub mod api_key_rest_controller;
