pub mod app;
pub mod deferred;
pub mod input;
pub mod modal;
pub mod outside;
pub mod render;
pub mod text_field;
pub mod theme;

pub use app::run;
