use crate::trimesh::{MeshError, TriMesh};
use std::io::{self, Write};
use tracing::info;

/// Errors from OBJ parsing.
#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("line {line}: vertex needs 3 coordinates")]
    MalformedVertex { line: usize },
    #[error("line {line}: face needs exactly 3 vertex indices")]
    MalformedFace { line: usize },
    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("line {line}: face index 0 (OBJ indices are 1-based)")]
    ZeroIndex { line: usize },
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Parse an OBJ document with a single linear scan over `v` and `f` lines.
///
/// Faces must be triangles; quads and larger polygons are rejected rather
/// than silently truncated. Face tokens may carry `/texture/normal` suffixes,
/// which are ignored; only the position index is used. All other directives
/// (comments, groups, materials, vn/vt) are skipped. Indices are converted
/// from 1-based to 0-based and validated against the vertex count.
pub fn parse_obj(text: &str) -> Result<TriMesh, ObjError> {
    let mut positions: Vec<f64> = Vec::new();
    let mut triangles: Vec<u32> = Vec::new();

    for (line_idx, raw) in text.lines().enumerate() {
        let line = line_idx + 1;
        let mut tokens = raw.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let mut parsed = 0;
                for token in tokens.by_ref().take(3) {
                    let value: f64 =
                        token.parse().map_err(|_| ObjError::InvalidNumber {
                            line,
                            token: token.to_string(),
                        })?;
                    positions.push(value);
                    parsed += 1;
                }
                if parsed != 3 {
                    return Err(ObjError::MalformedVertex { line });
                }
            }
            Some("f") => {
                let mut parsed = 0;
                for token in tokens.by_ref().take(3) {
                    // "1/2/3" style tokens: the position index is the part
                    // before the first slash.
                    let index_token = token.split('/').next().unwrap_or(token);
                    let index: u32 =
                        index_token.parse().map_err(|_| ObjError::InvalidNumber {
                            line,
                            token: token.to_string(),
                        })?;
                    if index == 0 {
                        return Err(ObjError::ZeroIndex { line });
                    }
                    triangles.push(index - 1);
                    parsed += 1;
                }
                if parsed != 3 || tokens.next().is_some() {
                    return Err(ObjError::MalformedFace { line });
                }
            }
            _ => {} // comments, vn/vt, groups, empty lines
        }
    }

    let mesh = TriMesh::from_buffers(positions, triangles)?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "parsed OBJ mesh"
    );
    Ok(mesh)
}

/// Write position and triangle buffers as OBJ `v`/`f` lines (1-based).
pub fn write_obj<W: Write>(out: &mut W, positions: &[f64], triangles: &[u32]) -> io::Result<()> {
    for v in positions.chunks_exact(3) {
        writeln!(out, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for f in triangles.chunks_exact(3) {
        writeln!(out, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
    }
    Ok(())
}
