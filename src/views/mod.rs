pub mod admin_panel;
pub mod app;
pub mod header;
pub mod login;
pub mod sweet_card;
pub mod sweet_list;

pub use app::render_app;
pub use header::render_header;
pub use login::render_auth_screen;
pub use sweet_card::render_sweet_card;
pub use sweet_list::{render_search_bar, render_sweet_list};
