pub mod app;
pub mod audio;
pub mod context;
pub mod keyboard;
pub mod notice;
pub mod routes;
pub mod scripts;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
