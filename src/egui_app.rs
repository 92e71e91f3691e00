//! Widget UI: state model, controller and egui renderer.

pub mod controller;
pub mod state;
pub mod ui;
