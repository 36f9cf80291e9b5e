//! egui front end for the spell tracker

mod app;
mod components;
mod constants;
mod textures;

pub use app::run_gui;
