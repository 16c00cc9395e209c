//! TOML scene and render configuration.
//!
//! Every section is optional; missing values fall back to the built-in demo
//! scene defaults. Loading resolves meshes and the skybox image eagerly, so
//! bad files are reported before any pixel is rendered.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::Vec3A;
use log::{debug, info};
use serde::Deserialize;

use crate::camera::Camera;
use crate::color::Color;
use crate::light::Light;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::plane::Plane;
use crate::primitive::Primitive;
use crate::scene::Scene;
use crate::skybox::Skybox;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Field of view in degrees
    pub fov: f32,
    /// Requested mirror depth; only one bounce is ever evaluated
    pub reflection_depth: u32,
    pub output: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov: 90.0,
            reflection_depth: 1,
            output: "output.png".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    pub position: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LightSettings {
    pub position: [f32; 3],
    /// Channels in [0, 255]
    pub color: [f32; 3],
    pub strength: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: [5.0, 5.0, 0.0],
            color: [255.0, 255.0, 255.0],
            strength: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SkyboxSettings {
    /// Panorama image; a procedural gradient is used when absent
    pub path: Option<PathBuf>,
}

/// Base color of a primitive: one `color` or a checkerboard pair of `colors`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PigmentSettings {
    Solid { color: [f32; 3] },
    Checker { colors: [[f32; 3]; 2] },
}

impl PigmentSettings {
    fn material(&self, reflectivity: f32) -> Material {
        match self {
            PigmentSettings::Solid { color } => Material::solid(Color::from(*color), reflectivity),
            PigmentSettings::Checker { colors: [even, odd] } => {
                Material::checker(Color::from(*even), Color::from(*odd), reflectivity)
            }
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrimitiveSettings {
    Sphere {
        center: [f32; 3],
        radius: f32,
        #[serde(flatten)]
        pigment: PigmentSettings,
        #[serde(default)]
        reflectivity: f32,
    },
    Plane {
        height: f32,
        #[serde(flatten)]
        pigment: PigmentSettings,
        #[serde(default)]
        reflectivity: f32,
    },
    Triangle {
        vertices: [[f32; 3]; 3],
        normal: [f32; 3],
        #[serde(flatten)]
        pigment: PigmentSettings,
        #[serde(default)]
        reflectivity: f32,
    },
}

impl PrimitiveSettings {
    pub fn build(&self) -> Primitive {
        match self {
            PrimitiveSettings::Sphere {
                center,
                radius,
                pigment,
                reflectivity,
            } => Sphere::new(Vec3A::from(*center), *radius, pigment.material(*reflectivity)).into(),
            PrimitiveSettings::Plane {
                height,
                pigment,
                reflectivity,
            } => Plane::new(*height, pigment.material(*reflectivity)).into(),
            PrimitiveSettings::Triangle {
                vertices: [v0, v1, v2],
                normal,
                pigment,
                reflectivity,
            } => Triangle::new(
                Vec3A::from(*v0),
                Vec3A::from(*v1),
                Vec3A::from(*v2),
                Vec3A::from(*normal),
                pigment.material(*reflectivity),
            )
            .into(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MeshSettings {
    /// Relative paths are resolved against the config file's directory
    pub path: PathBuf,
    pub color: [f32; 3],
    #[serde(default)]
    pub reflectivity: f32,
    #[serde(default)]
    pub offset: [f32; 3],
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderSettings,
    pub camera: CameraSettings,
    pub light: LightSettings,
    pub skybox: SkyboxSettings,
    pub primitives: Vec<PrimitiveSettings>,
    pub meshes: Vec<MeshSettings>,
}

/// Everything needed to render frames, fully loaded.
#[derive(Debug, Clone)]
pub struct World {
    pub camera: Camera,
    pub scene: Scene,
    pub light: Light,
    pub skybox: Skybox,
    pub reflection_depth: u32,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(input: &str) -> Result<Self> {
        toml::from_str(input).context("failed to parse configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config =
            Self::from_toml(&input).with_context(|| format!("in config {}", path.display()))?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        info!("Loaded config {}", path.display());
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for mesh in &mut self.meshes {
            if mesh.path.is_relative() {
                mesh.path = base.join(&mesh.path);
            }
        }
        if let Some(path) = self.skybox.path.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Demo scene: three colored spheres, a mirror sphere and a checkerboard
    /// floor under a gradient sky.
    pub fn demo() -> Self {
        let solid = |color: [f32; 3]| PigmentSettings::Solid { color };
        Self {
            primitives: vec![
                PrimitiveSettings::Sphere {
                    center: [0.0, 0.0, -5.0],
                    radius: 1.0,
                    pigment: solid([255.0, 0.0, 0.0]),
                    reflectivity: 0.0,
                },
                PrimitiveSettings::Sphere {
                    center: [4.0, 0.0, -7.0],
                    radius: 1.0,
                    pigment: solid([0.0, 0.0, 255.0]),
                    reflectivity: 0.0,
                },
                PrimitiveSettings::Sphere {
                    center: [-2.0, 0.0, -7.0],
                    radius: 1.0,
                    pigment: solid([0.0, 255.0, 0.0]),
                    reflectivity: 0.0,
                },
                PrimitiveSettings::Sphere {
                    center: [2.0, 0.5, -10.0],
                    radius: 1.5,
                    pigment: solid([220.0, 220.0, 220.0]),
                    reflectivity: 0.8,
                },
                PrimitiveSettings::Plane {
                    height: -1.0,
                    pigment: PigmentSettings::Checker {
                        colors: [[230.0, 230.0, 230.0], [40.0, 40.0, 40.0]],
                    },
                    reflectivity: 0.25,
                },
            ],
            ..Self::default()
        }
    }

    /// Load meshes and the skybox and assemble the frame inputs.
    pub fn build(&self) -> Result<World> {
        let render = &self.render;
        let camera = Camera::new(
            Vec3A::from(self.camera.position),
            render.width,
            render.height,
            render.fov,
        );
        let light = Light::new(
            Vec3A::from(self.light.position),
            Color::from(self.light.color),
            self.light.strength,
        );

        let mut scene: Scene = self.primitives.iter().map(PrimitiveSettings::build).collect();
        for settings in &self.meshes {
            let mesh = Mesh::load(&settings.path)?;
            let material = Material::solid(Color::from(settings.color), settings.reflectivity);
            scene.extend(mesh.triangles(material, Vec3A::from(settings.offset)));
        }
        for primitive in scene.primitives() {
            debug!("{}: {:?}", primitive.kind(), primitive.material());
        }
        info!("Scene has {} primitives", scene.len());

        let skybox = match &self.skybox.path {
            Some(path) => Skybox::load(path)?,
            None => default_sky(),
        };

        Ok(World {
            camera,
            scene,
            light,
            skybox,
            reflection_depth: render.reflection_depth,
        })
    }
}

/// White horizon fading to light blue overhead.
pub fn default_sky() -> Skybox {
    Skybox::gradient(
        256,
        128,
        Color::new(255.0, 255.0, 255.0),
        Color::new(127.5, 178.5, 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
[render]
width = 64
height = 48
fov = 70.0

[camera]
position = [0.0, 1.0, 2.0]

[light]
position = [0.0, 10.0, 0.0]
color = [255.0, 0.0, 0.0]
strength = 2.0

[[primitives]]
type = "sphere"
center = [0.0, 0.0, -5.0]
radius = 1.0
color = [255.0, 255.0, 255.0]
reflectivity = 0.5

[[primitives]]
type = "plane"
height = -1.0
colors = [[255.0, 255.0, 255.0], [0.0, 0.0, 0.0]]

[[primitives]]
type = "triangle"
vertices = [[0.0, 0.0, -3.0], [1.0, 0.0, -3.0], [0.0, 1.0, -3.0]]
normal = [0.0, 0.0, 1.0]
color = [10.0, 20.0, 30.0]
"#;

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(SCENE).unwrap();
        assert_eq!(config.render.width, 64);
        assert_eq!(config.render.reflection_depth, 1);
        assert_eq!(config.render.output, "output.png");
        assert_eq!(config.primitives.len(), 3);
        assert!(matches!(
            config.primitives[1],
            PrimitiveSettings::Plane {
                pigment: PigmentSettings::Checker { .. },
                reflectivity,
                ..
            } if reflectivity == 0.0
        ));
    }

    #[test]
    fn builds_world() {
        let world = Config::from_toml(SCENE).unwrap().build().unwrap();
        assert_eq!(world.scene.len(), 3);
        assert_eq!(world.camera.position, Vec3A::new(0.0, 1.0, 2.0));
        assert_eq!(world.light.color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(world.scene.get(0).reflectivity(), 0.5);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.width, 800);
    }

    #[test]
    fn rejects_unknown_primitive() {
        let input = "[[primitives]]\ntype = \"torus\"\ncolor = [1.0, 1.0, 1.0]\n";
        assert!(Config::from_toml(input).is_err());
    }

    #[test]
    fn missing_mesh_fails_before_rendering() {
        let mut config = Config::demo();
        config.meshes.push(MeshSettings {
            path: PathBuf::from("no/such/mesh.obj"),
            color: [255.0, 255.0, 255.0],
            reflectivity: 0.0,
            offset: [0.0, 0.0, 0.0],
        });
        assert!(config.build().is_err());
    }

    #[test]
    fn missing_skybox_fails_before_rendering() {
        let mut config = Config::demo();
        config.skybox.path = Some(PathBuf::from("no/such/sky.hdr.png"));
        assert!(config.build().is_err());
    }

    #[test]
    fn skybox_path_is_resolved_against_config_dir() {
        let mut config = Config::from_toml("[skybox]\npath = \"sky.png\"\n").unwrap();
        config.resolve_paths(Path::new("scenes"));
        assert_eq!(config.skybox.path, Some(PathBuf::from("scenes/sky.png")));
    }

    #[test]
    fn demo_has_checkered_floor() {
        let world = Config::demo().build().unwrap();
        assert_eq!(world.scene.len(), 5);
        assert_eq!(world.scene.get(4).kind(), "plane");
    }
}
