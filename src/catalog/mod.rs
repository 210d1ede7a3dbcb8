// src/catalog/mod.rs

// Declare child modules
pub mod filter;
pub mod locale;
pub mod repository;

// Re-export the types handlers work with
pub use filter::ProductFilter;
pub use locale::Lang;
pub use repository::CatalogRepository;
