//! Triangle mesh loading from a small OBJ-like text format.
//!
//! Recognized lines:
//! - `v x y z`    vertex position
//! - `vn x y z`   face normal, one per face in face order
//! - `f a b c`    triangle from 1-based vertex indices (`a/..` suffixes ignored)
//!
//! Blank lines, `#` comments and any other keyword are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3A;
use log::{info, warn};

use crate::material::Material;
use crate::primitive::Primitive;
use crate::triangle::Triangle;

/// Parsed mesh: parallel vertex, face and per-face normal lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<Vec3A>,
    /// Zero-based vertex index triples
    pub faces: Vec<[usize; 3]>,
    /// One normal per face
    pub normals: Vec<Vec3A>,
}

impl Mesh {
    /// Open and parse a mesh file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open mesh {}", path.display()))?;
        let mesh = Self::parse(BufReader::new(file))
            .with_context(|| format!("malformed mesh {}", path.display()))?;
        info!(
            "Loaded mesh {} ({} vertices, {} faces)",
            path.display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Parse a mesh from any buffered reader.
    ///
    /// Validates every index against the vertex count and requires either no
    /// normals at all (derived from the winding) or exactly one per face.
    pub fn parse(reader: impl BufRead) -> Result<Self> {
        let mut mesh = Mesh::default();
        let mut raw_faces: Vec<(usize, [usize; 3])> = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let number = number + 1;
            let line = line.with_context(|| format!("failed to read line {number}"))?;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => mesh.vertices.push(parse_vector(tokens, number)?),
                Some("vn") => mesh.normals.push(parse_vector(tokens, number)?),
                Some("f") => raw_faces.push((number, parse_face(tokens, number)?)),
                _ => {}
            }
        }

        // Faces may precede the vertices they use, so indices are checked last
        for (number, face) in raw_faces {
            let mut indices = [0; 3];
            for (slot, &index) in indices.iter_mut().zip(face.iter()) {
                if index > mesh.vertices.len() {
                    bail!(
                        "line {number}: vertex index {index} out of range (mesh has {} vertices)",
                        mesh.vertices.len()
                    );
                }
                *slot = index - 1;
            }
            mesh.faces.push(indices);
        }

        if mesh.normals.is_empty() && !mesh.faces.is_empty() {
            warn!("Mesh has no normals, deriving them from vertex winding");
            mesh.normals = mesh.faces.iter().map(|f| mesh.winding_normal(f)).collect();
        } else if mesh.normals.len() != mesh.faces.len() {
            bail!(
                "mesh has {} faces but {} normals",
                mesh.faces.len(),
                mesh.normals.len()
            );
        }

        Ok(mesh)
    }

    fn winding_normal(&self, face: &[usize; 3]) -> Vec3A {
        let [a, b, c] = face.map(|i| self.vertices[i]);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Convert every face into a triangle primitive, translated by `offset`.
    ///
    /// Expects one normal per face, as [`Mesh::parse`] guarantees.
    pub fn triangles(&self, material: Material, offset: Vec3A) -> Vec<Primitive> {
        debug_assert_eq!(
            self.faces.len(),
            self.normals.len(),
            "mesh needs one normal per face"
        );
        self.faces
            .iter()
            .zip(&self.normals)
            .map(|(face, &normal)| {
                let [v0, v1, v2] = face.map(|i| self.vertices[i] + offset);
                Primitive::Triangle(Triangle::new(v0, v1, v2, normal, material))
            })
            .collect()
    }
}

fn parse_vector<'a>(tokens: impl Iterator<Item = &'a str>, number: usize) -> Result<Vec3A> {
    let values = tokens
        .map(|t| {
            t.parse::<f32>()
                .with_context(|| format!("line {number}: invalid number '{t}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    match values.as_slice() {
        [x, y, z] => Ok(Vec3A::new(*x, *y, *z)),
        _ => bail!("line {number}: expected 3 components, got {}", values.len()),
    }
}

fn parse_face<'a>(tokens: impl Iterator<Item = &'a str>, number: usize) -> Result<[usize; 3]> {
    let indices = tokens
        .map(|t| {
            // "7/1/3" and "7//3" reference vertex 7
            let vertex = t.split('/').next().unwrap_or(t);
            match vertex.parse::<usize>() {
                Ok(0) => bail!("line {number}: vertex indices are 1-based, got 0"),
                Ok(index) => Ok(index),
                Err(_) => bail!("line {number}: invalid vertex index '{t}'"),
            }
        })
        .collect::<Result<Vec<_>>>()?;
    match indices.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => bail!("line {number}: only triangular faces are supported, got {} indices", indices.len()),
    }
}
