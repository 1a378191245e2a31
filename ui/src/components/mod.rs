//! Shared components for the app. Components are the building blocks of
//! dioxus apps; here they are thin wrappers over Pico.css markup.
pub mod pico;
