pub mod catalog_viewmodel;
pub mod session_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
pub use session_viewmodel::SessionViewModel;
