pub mod color_identification_domain_error;
