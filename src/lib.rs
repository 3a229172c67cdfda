#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod config;
pub mod die;
pub mod face_image;
pub mod random;
pub mod strings;
pub mod theme;
pub mod view;

pub use app::App;
