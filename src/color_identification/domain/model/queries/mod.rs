pub mod derive_color_query;
