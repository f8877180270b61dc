// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod app_state;
pub mod catalog_state;
pub mod session_state;

pub use app_state::AppState;
pub use catalog_state::{CatalogPhase, CatalogState, FetchTicket};
pub use session_state::SessionState;
