mod app;
mod components;
mod game_form_view;
mod game_list_view;
mod styles;

pub use app::GameCrudApp;
