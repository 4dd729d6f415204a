//! Walks an SVG document tree and collects its drawable paths.

use std::path::Path as FilePath;

use beamcut_core::{Path, Transform};
use tracing::{debug, info};

use crate::document::{SvgDocument, SvgNode};
use crate::error::SvgResult;
use crate::path_data::parse_path_data;
use crate::transform::parse_transform_list;

/// Collects every path under the document root, in document order.
///
/// Group transforms compose down the tree (`inherited * own`); each
/// `path` node with a `d` attribute yields one [`Path`] carrying the
/// transform in effect at its position. Nodes that are neither groups nor paths
/// are ignored. Any path-data failure aborts the whole collection.
pub fn collect_paths(document: &SvgDocument) -> SvgResult<Vec<Path>> {
    let mut paths = Vec::new();
    collect_children(document.root(), Transform::identity(), &mut paths)?;
    info!("Collected {} paths from document", paths.len());
    Ok(paths)
}

fn collect_children(
    node: &SvgNode,
    inherited: Transform,
    paths: &mut Vec<Path>,
) -> SvgResult<()> {
    for child in node.children() {
        let own = match child.attribute("transform") {
            Some(text) => parse_transform_list(text),
            None => Transform::identity(),
        };
        let effective = inherited * own;
        match child.name() {
            "g" => collect_children(child, effective, paths)?,
            "path" => {
                if let Some(d) = child.attribute("d") {
                    let segments = parse_path_data(d)?;
                    debug!("Collected path with {} segments", segments.len());
                    paths.push(Path::new(segments, effective));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parses SVG text and collects its paths.
pub fn load_paths(text: &str) -> SvgResult<Vec<Path>> {
    let document = SvgDocument::parse(text)?;
    collect_paths(&document)
}

/// Reads an SVG file and collects its paths.
pub fn load_paths_from_file(path: &FilePath) -> SvgResult<Vec<Path>> {
    let document = SvgDocument::load(path)?;
    collect_paths(&document)
}
