pub mod color_identification_rest_controller;
