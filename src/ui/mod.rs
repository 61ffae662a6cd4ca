//! UI rendering modules for the studio.
//!
//! This module contains all egui-based rendering code, organized by component:
//! - `toolbar`: Top toolbar with preset/display/theme controls
//! - `phone`: Phone chrome and interface composition
//! - `header`: Chat header and quick actions
//! - `messages`: Transcript rendering (bubbles, dividers, reactions)
//! - `input_bar`: Decorative bottom input bar
//! - `builder`: Authoring side panel
//! - `theme`: Color palettes and styling utilities

pub mod builder;
pub mod header;
pub mod input_bar;
pub mod messages;
pub mod phone;
pub mod theme;
pub mod toolbar;
