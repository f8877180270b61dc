pub mod auth;
pub mod sweet;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, Session, User};
pub use sweet::{RestockRequest, Sweet, SweetDraft, SweetUpdate};
