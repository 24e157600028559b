// src/infrastructure/mod.rs
//
// Filesystem-facing infrastructure

pub mod type_stylesheet;

pub use type_stylesheet::{
    collect_icon_files, generate_type_stylesheet, normalize_type_name, render_stylesheet,
};
