//! # UI Rendering
//!
//! - [`theme`]: color palette and egui visuals
//! - [`screens`]: screen-level rendering (attach, dashboard)
//! - [`widgets`]: reusable components (tables, forms, cards)

pub mod screens;
pub mod theme;
pub mod widgets;
