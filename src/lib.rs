pub mod animation;
pub mod assets;
pub mod background;
pub mod collision;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod motion;
pub mod spawn;
pub mod store;
pub mod text;
