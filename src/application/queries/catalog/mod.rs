mod service;

pub use service::CatalogQueryService;
