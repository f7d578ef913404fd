//! Reader for the Tarantula text mesh format.
//!
//! The format interleaves line-oriented and whitespace-token-oriented reads: two
//! discarded header lines, a node count then N lines of three coordinates, three
//! discarded lines, a tet count then M lines of `4 v0 v1 v2 v3`, and finally a
//! line-scanning loop that collects every `mat<k>` section until end of file. This
//! module reproduces that interleaving with a small cursor instead of re-deriving the
//! grammar from a single tokenizer pass, since the boundary between "line" and "token"
//! reads is meaningful to the original format (a `mat` section header is matched against
//! a whole line, not a token).

use std::io::BufRead;

use crate::error::{ExtractError, Result};
use crate::types::{MaterialSets, TetMesh, Vertex};

/// A cursor over a text input that supports both whole-line reads and
/// whitespace-delimited token reads, buffering leftover tokens from a partially
/// consumed line.
struct Cursor<R: BufRead> {
    reader: R,
    pending_tokens: std::collections::VecDeque<String>,
}

impl<R: BufRead> Cursor<R> {
    fn new(reader: R) -> Self {
        Cursor {
            reader,
            pending_tokens: std::collections::VecDeque::new(),
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.pending_tokens.clear();
        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(ExtractError::Io)?;
        if bytes == 0 {
            return Err(ExtractError::MalformedInput {
                detail: "unexpected end of file while reading a line".to_string(),
            });
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Read the next whitespace-delimited token, pulling further lines from the
    /// underlying reader as needed.
    fn next_token(&mut self, context: &str) -> Result<String> {
        loop {
            if let Some(tok) = self.pending_tokens.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            let bytes = self
                .reader
                .read_line(&mut line)
                .map_err(ExtractError::Io)?;
            if bytes == 0 {
                return Err(ExtractError::MalformedInput {
                    detail: format!("unexpected end of file while reading {context}"),
                });
            }
            self.pending_tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_usize(&mut self, context: &str) -> Result<usize> {
        let tok = self.next_token(context)?;
        tok.parse::<usize>().map_err(|_| ExtractError::MalformedInput {
            detail: format!("expected an integer while reading {context}, got {tok:?}"),
        })
    }

    fn next_f64(&mut self, context: &str) -> Result<f64> {
        let tok = self.next_token(context)?;
        tok.parse::<f64>().map_err(|_| ExtractError::MalformedInput {
            detail: format!("expected a number while reading {context}, got {tok:?}"),
        })
    }

    /// True once the underlying reader has no more lines to give, including any
    /// buffered line fragment.
    fn is_exhausted(&mut self) -> bool {
        if !self.pending_tokens.is_empty() {
            return false;
        }
        matches!(self.reader.fill_buf(), Ok(buf) if buf.is_empty())
    }
}

/// Parse a Tarantula mesh from `input`, returning the raw tet mesh (all tets live,
/// before material selection) and the three parsed material sections.
pub fn parse(input: impl BufRead) -> Result<(TetMesh, MaterialSets)> {
    let mut cursor = Cursor::new(input);

    // Two discarded header lines.
    cursor.next_line()?;
    cursor.next_line()?;

    let num_nodes = cursor.next_usize("the node count")?;

    let mut vertices: Vec<Vertex> = Vec::with_capacity(num_nodes);
    for i in 0..num_nodes {
        let x = cursor.next_f64(&format!("node {i} x coordinate"))?;
        let y = cursor.next_f64(&format!("node {i} y coordinate"))?;
        let z = cursor.next_f64(&format!("node {i} z coordinate"))?;
        vertices.push([x, y, z]);
    }

    // Three discarded lines separating the vertex block from the element block.
    cursor.next_line()?;
    cursor.next_line()?;
    cursor.next_line()?;

    let num_tets = cursor.next_usize("the tet count")?;
    let mut tets = Vec::with_capacity(num_tets);
    for i in 0..num_tets {
        let nloc = cursor.next_usize(&format!("tet {i} vertex count"))?;
        if nloc != 4 {
            return Err(ExtractError::MalformedInput {
                detail: format!("tet {i} declares {nloc} vertices, expected 4"),
            });
        }
        let v0 = cursor.next_usize(&format!("tet {i} vertex 0"))?;
        let v1 = cursor.next_usize(&format!("tet {i} vertex 1"))?;
        let v2 = cursor.next_usize(&format!("tet {i} vertex 2"))?;
        let v3 = cursor.next_usize(&format!("tet {i} vertex 3"))?;
        tets.push([v0, v1, v2, v3]);
    }

    // Scan the remainder of the file for exactly three "mat<k>" sections.
    let mut sections: Vec<Vec<usize>> = Vec::new();
    while !cursor.is_exhausted() {
        let line = cursor.next_line()?;
        if !line.starts_with("mat") {
            continue;
        }
        // Junk the line immediately following the section header.
        cursor.next_line()?;

        let count = cursor.next_usize("a material section count")?;
        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            cells.push(cursor.next_usize("a material section cell index")?);
        }
        sections.push(cells);
    }

    if sections.len() != 3 {
        return Err(ExtractError::MalformedInput {
            detail: format!(
                "expected exactly 3 material sections, found {}",
                sections.len()
            ),
        });
    }

    let materials = MaterialSets {
        mat0: std::mem::take(&mut sections[0]),
        mat1: std::mem::take(&mut sections[1]),
        mat2: std::mem::take(&mut sections[2]),
    };

    let tets = normalize_indexing(tets, num_nodes);

    let mesh = TetMesh {
        vertices,
        live: vec![true; tets.len()],
        tets,
    };

    Ok((mesh, materials))
}

/// Detect whether tet vertex indices are 1-based (as the original Tarantula tool itself
/// sometimes emits) and, if so, decrement them to 0-based.
///
/// Indices are treated as 1-based only if vertex index `0` never occurs anywhere in the
/// connectivity AND the maximum index found equals `num_nodes`; otherwise they are
/// trusted as already 0-based.
fn normalize_indexing(tets: Vec<[usize; 4]>, num_nodes: usize) -> Vec<[usize; 4]> {
    let has_zero = tets.iter().any(|t| t.iter().any(|&v| v == 0));
    let max_index = tets.iter().flatten().copied().max().unwrap_or(0);

    if !has_zero && max_index == num_nodes {
        tets.into_iter()
            .map(|t| t.map(|v| v - 1))
            .collect()
    } else {
        tets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    fn sample() -> &'static str {
        "header line 1\n\
         header line 2\n\
         4\n\
         0.0 0.0 0.0\n\
         1.0 0.0 0.0\n\
         0.0 1.0 0.0\n\
         0.0 0.0 1.0\n\
         junk1\n\
         junk2\n\
         junk3\n\
         1\n\
         4 0 1 2 3\n\
         mat0\n\
         junk\n\
         1\n\
         0\n\
         mat1\n\
         junk\n\
         0\n\
         mat2\n\
         junk\n\
         0\n"
    }

    #[test]
    fn parses_header_coordinates_and_single_tet() {
        let (mesh, materials) = parse(IoCursor::new(sample().as_bytes())).unwrap();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_tets(), 1);
        assert_eq!(mesh.tets[0], [0, 1, 2, 3]);
        assert_eq!(materials.mat0, vec![0]);
        assert_eq!(materials.mat1, Vec::<usize>::new());
        assert_eq!(materials.mat2, Vec::<usize>::new());
    }

    #[test]
    fn rejects_wrong_material_section_count() {
        let bad = sample().replace("mat2\njunk\n0\n", "");
        let result = parse(IoCursor::new(bad.as_bytes()));
        assert!(matches!(result, Err(ExtractError::MalformedInput { .. })));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let bad = sample().replace("0.0 0.0 0.0", "nope 0.0 0.0");
        let result = parse(IoCursor::new(bad.as_bytes()));
        assert!(matches!(result, Err(ExtractError::MalformedInput { .. })));
    }

    #[test]
    fn rejects_truncated_file() {
        let truncated = "header 1\nheader 2\n4\n0.0 0.0 0.0\n";
        let result = parse(IoCursor::new(truncated.as_bytes()));
        assert!(matches!(result, Err(ExtractError::MalformedInput { .. })));
    }

    #[test]
    fn one_based_indices_are_normalized_to_zero_based() {
        let text = "h1\nh2\n4\n\
                     0.0 0.0 0.0\n1.0 0.0 0.0\n0.0 1.0 0.0\n0.0 0.0 1.0\n\
                     j1\nj2\nj3\n\
                     1\n4 1 2 3 4\n\
                     mat0\nj\n0\n\
                     mat1\nj\n0\n\
                     mat2\nj\n1\n0\n";
        let (mesh, materials) = parse(IoCursor::new(text.as_bytes())).unwrap();
        assert_eq!(mesh.tets[0], [0, 1, 2, 3]);
        assert_eq!(materials.mat2, vec![0]);
    }
}
