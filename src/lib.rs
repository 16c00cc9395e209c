//! Skyglint ray tracer
//!
//! Renders a static scene of spheres, horizontal planes and triangle meshes
//! lit by a point light, with hard shadows, checkerboard floors, a single
//! mirror bounce and an equirectangular skybox background.

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod color;
pub mod config;
pub mod hittable;
pub mod integrator;
pub mod interval;
pub mod light;
pub mod material;
pub mod mesh;
pub mod output;
pub mod plane;
pub mod primitive;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod skybox;
pub mod sphere;
pub mod triangle;
