use crate::core::geometry::{TexCoord, Triangle};
use crate::scene::mesh::Mesh;
use log::{info, warn};
use nalgebra::{Point3, Vector2};
use std::io::BufRead;
use std::path::Path;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        // Positions and UVs keep separate index streams: UVs are per triangle corner.
        single_index: false,
        ..Default::default()
    }
}

/// Loads an OBJ file and returns a unified Mesh.
///
/// Materials are ignored. Corners without a texture coordinate get `(0, 0)`.
pub fn load_obj(path: &str) -> Result<Mesh, String> {
    let path_obj = Path::new(path);
    if !path_obj.exists() {
        return Err(format!("File not found: {}", path));
    }

    info!("Loading OBJ file: {}", path);

    let (models, _materials) = tobj::load_obj(path_obj, &load_options())
        .map_err(|e| format!("Failed to load OBJ: {}", e))?;

    mesh_from_models(&models)
}

/// Parses OBJ text from any buffered reader. `mtllib` references are skipped.
pub fn parse_obj<R: BufRead>(reader: &mut R) -> Result<Mesh, String> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|e| format!("Failed to parse OBJ: {}", e))?;

    mesh_from_models(&models)
}

/// Merges every model of an OBJ file into a single mesh.
fn mesh_from_models(models: &[tobj::Model]) -> Result<Mesh, String> {
    let mut vertices = Vec::new();
    let mut triangles: Vec<Triangle> = Vec::new();
    let mut tex_coords: Vec<[TexCoord; 3]> = Vec::new();
    let mut index_offset = 0;

    for model in models {
        let mesh = &model.mesh;
        let num_vertices = mesh.positions.len() / 3;

        for p in mesh.positions.chunks_exact(3) {
            vertices.push(Point3::new(p[0], p[1], p[2]));
        }

        let has_texcoords =
            !mesh.texcoords.is_empty() && mesh.texcoord_indices.len() == mesh.indices.len();
        if !has_texcoords {
            warn!(
                "Mesh '{}' has no usable texture coordinates. Using (0, 0).",
                model.name
            );
        }

        let texcoord = |corner: usize| -> TexCoord {
            if !has_texcoords {
                return Vector2::zeros();
            }
            let t = mesh.texcoord_indices[corner] as usize;
            match (mesh.texcoords.get(t * 2), mesh.texcoords.get(t * 2 + 1)) {
                (Some(&u), Some(&v)) => Vector2::new(u, v),
                _ => Vector2::zeros(),
            }
        };

        // Indices are offset by the vertices already merged from earlier models.
        for (face, corners) in mesh.indices.chunks_exact(3).enumerate() {
            triangles.push([
                corners[0] as usize + index_offset,
                corners[1] as usize + index_offset,
                corners[2] as usize + index_offset,
            ]);
            let base = face * 3;
            tex_coords.push([texcoord(base), texcoord(base + 1), texcoord(base + 2)]);
        }

        index_offset += num_vertices;
    }

    info!(
        "OBJ loaded successfully. Total vertices: {}, Total triangles: {}",
        vertices.len(),
        triangles.len()
    );

    Mesh::new(vertices, triangles, tex_coords).map_err(|e| e.to_string())
}
