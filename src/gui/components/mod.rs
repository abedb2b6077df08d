// GUI Components module
mod confirm_dialog;
mod error_banner;
mod game_card;
mod header;

pub use confirm_dialog::ConfirmDialog;
pub use error_banner::ErrorBanner;
pub use game_card::GameCard;
pub use header::Header;
