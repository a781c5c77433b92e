pub mod authorizer_rest_controller;
