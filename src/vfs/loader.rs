//! VFS Source Loader
//!
//! Builds a `VfsTree` from a serialized CSV description. Each record is
//! one path with a declared type and, for files, base64-encoded content.
//! Loading is all-or-nothing: any bad record fails the whole load and no
//! partial tree escapes.

use std::fs::File;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

use super::node::{Node, NodeKind, VfsTree};
use super::path::split_segments;

/// Header fields the source must declare, in any order.
const REQUIRED_FIELDS: [&str; 3] = ["path", "type", "content"];

/// Loader errors. All fatal to the load; the caller gets no tree.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open VFS source '{path}': {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed VFS source: {0}")]
    MalformedSchema(String),

    #[error("invalid type '{kind}' for '{path}'")]
    InvalidType { path: String, kind: String },

    #[error("missing parent directory for '{path}'")]
    MissingParent { path: String },

    #[error("conflicting declarations for '{path}'")]
    TypeConflict { path: String },

    #[error("invalid base64 content for '{path}': {source}")]
    BadEncoding {
        path: String,
        #[source]
        source: base64::DecodeError,
    },
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::MalformedSchema(e.to_string())
    }
}

/// One row of the serialized source.
#[derive(Debug, Deserialize)]
struct SourceRecord {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: String,
}

/// Load a VFS tree from a source file on the real filesystem.
pub fn load_file(path: &Path) -> Result<VfsTree, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    load_source(file)
}

/// Load a VFS tree from any reader yielding the CSV source format.
pub fn load_source(reader: impl io::Read) -> Result<VfsTree, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    check_schema(&mut csv_reader)?;

    let mut tree = VfsTree::new();
    for record in csv_reader.deserialize::<SourceRecord>() {
        apply_record(&mut tree, record?)?;
    }
    Ok(tree)
}

fn check_schema<R: io::Read>(reader: &mut csv::Reader<R>) -> Result<(), LoadError> {
    let headers = reader.headers()?;
    let fields: Vec<&str> = headers.iter().collect();
    if fields.len() != REQUIRED_FIELDS.len()
        || !REQUIRED_FIELDS.iter().all(|f| fields.contains(f))
    {
        return Err(LoadError::MalformedSchema(format!(
            "expected fields path,type,content, got '{}'",
            fields.join(",")
        )));
    }
    Ok(())
}

fn parse_kind(record: &SourceRecord) -> Result<NodeKind, LoadError> {
    match record.kind.as_str() {
        "dir" => Ok(NodeKind::Directory),
        "file" => Ok(NodeKind::File),
        other => Err(LoadError::InvalidType {
            path: record.path.clone(),
            kind: other.to_string(),
        }),
    }
}

fn apply_record(tree: &mut VfsTree, record: SourceRecord) -> Result<(), LoadError> {
    let kind = parse_kind(&record)?;

    if !record.path.starts_with('/') {
        return Err(LoadError::MalformedSchema(format!(
            "record path '{}' is not absolute",
            record.path
        )));
    }

    let segments: Vec<&str> = split_segments(&record.path).collect();
    let Some((name, parents)) = segments.split_last() else {
        // The root: pre-exists, never created, must be declared a dir.
        if kind != NodeKind::Directory {
            return Err(LoadError::InvalidType {
                path: record.path,
                kind: record.kind,
            });
        }
        return Ok(());
    };

    // Parents must already be present; the format lists ancestors first and
    // the loader does no reordering.
    let mut children = tree.root_children_mut();
    for segment in parents {
        children = match children.get_mut(*segment) {
            Some(Node::Directory { children }) => children,
            Some(Node::File { .. }) => {
                return Err(LoadError::TypeConflict {
                    path: record.path.clone(),
                })
            }
            None => {
                return Err(LoadError::MissingParent {
                    path: record.path.clone(),
                })
            }
        };
    }

    match children.get(*name) {
        Some(existing) => {
            // Same-kind re-declaration is tolerated; the first node wins.
            if existing.kind() != kind {
                return Err(LoadError::TypeConflict { path: record.path });
            }
        }
        None => {
            let node = match kind {
                NodeKind::Directory => Node::empty_dir(),
                NodeKind::File => {
                    let content = STANDARD.decode(record.content.trim()).map_err(|source| {
                        LoadError::BadEncoding {
                            path: record.path.clone(),
                            source,
                        }
                    })?;
                    Node::file(content)
                }
            };
            children.insert(name.to_string(), node);
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
