use std::path::Path;
use roxmltree::{Document, Node};
use super::error::SvgError;
use super::transform::{F64Point, Transform, compose, ftransform, parse_transform};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

fn read_to_string(filename: &Path) -> Result<String, SvgError> {
    std::fs::read_to_string(filename).map_err(|source| SvgError::Read {
        path: filename.display().to_string(),
        source,
    })
}

fn own_transform(node: Node) -> Result<Option<Transform>, SvgError> {
    match node.attribute("transform") {
        Some(attr) if !attr.trim().is_empty() => parse_transform(attr)
            .map(Some)
            .map_err(|source| SvgError::Transform {
                tag: node.tag_name().name().to_string(),
                source,
            }),
        _ => Ok(None),
    }
}

/// Maps the element's local coordinates into document space.
///
/// Transforms are gathered leaf to root and then folded root first, so the
/// outermost group's transform is applied last to a local point.
pub fn combined_transform(node: Node) -> Result<Transform, SvgError> {
    let mut chain = Vec::new();
    for ancestor in node.ancestors().filter(|n| n.is_element()) {
        if let Some(t) = own_transform(ancestor)? {
            chain.push(t);
        }
    }
    let mut ret = Transform::IDENTITY;
    for t in chain.iter().rev() {
        ret = compose(&ret, t);
    }
    Ok(ret)
}

fn coordinate(node: Node, name: &str) -> Option<f64> {
    let raw = node.attribute(name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("{}={:?} is not a number: {}", name, raw, e);
            None
        }
    }
}

fn is_svg_circle(node: &Node) -> bool {
    node.is_element()
        && node.tag_name().name() == "circle"
        && node.tag_name().namespace() == Some(SVG_NAMESPACE)
}

/// Resolved centers of every `<circle>` in document order.
///
/// Circles without a numeric `cx` and `cy` are skipped; a malformed
/// `transform` anywhere on the way up aborts the scan.
pub fn parse_circles(svg: &str) -> Result<Vec<F64Point>, SvgError> {
    let doc = Document::parse(svg)?;
    let root = doc.root_element();
    let mut circles = Vec::new();
    for node in root.descendants().skip(1).filter(is_svg_circle) {
        let (cx, cy) = match (coordinate(node, "cx"), coordinate(node, "cy")) {
            (Some(cx), Some(cy)) => (cx, cy),
            _ => {
                log::debug!("skipping circle at byte {}: missing or invalid cx/cy", node.range().start);
                continue
            }
        };
        let t = match combined_transform(node) {
            Ok(t) => t,
            Err(e) if e.skips_circle() => {
                log::debug!("skipping circle ({}, {}): {}", cx, cy, e);
                continue
            }
            Err(e) => return Err(e),
        };
        if !t.is_identity() {
            log::debug!("circle ({}, {}) under {}", cx, cy, t);
        }
        circles.push(ftransform(&t, (cx, cy)));
    }
    log::info!("resolved {} circles", circles.len());
    Ok(circles)
}

pub fn load_circles(filename: &Path) -> Result<Vec<F64Point>, SvgError> {
    parse_circles(&read_to_string(filename)?)
}
