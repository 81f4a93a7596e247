use super::*;
use crate::error::Error;
use crate::layout::types::GraphPoint;

const DOC: &str = r#"{
    "name": "G",
    "directed": true,
    "bb": "0,0,62,108",
    "objects": [
        {"_gvid": 0, "name": "a", "pos": "27,90", "width": "0.75", "height": "0.5"},
        {"_gvid": 1, "name": "b", "pos": "27,18", "width": 0.75, "height": 0.5},
        {"_gvid": 2, "name": "cluster_x", "bb": "0,0,62,108"}
    ],
    "edges": [
        {"_gvid": 0, "tail": 0, "head": 1, "pos": "e,27,36.104 27,71.697 27,63.983 27,54.712"},
        {"_gvid": 1, "tail": 1, "head": 0}
    ]
}"#;

#[test]
fn test_parse_document() {
    let geo = parse(DOC, 72.0).unwrap();
    assert_eq!(geo.bbox.width, 62.0);
    assert_eq!(geo.bbox.height, 108.0);

    assert_eq!(geo.nodes.len(), 2);
    assert_eq!(geo.nodes[0].name, "a");
    assert_eq!(geo.nodes[0].center, GraphPoint::new(27.0, 90.0));
    assert_eq!(geo.nodes[0].width, 54.0);
    assert_eq!(geo.nodes[0].height, 36.0);
    assert_eq!(geo.nodes[1].width, 54.0);

    assert_eq!(geo.edges.len(), 1);
    assert_eq!(geo.edges[0].name, "a -> b");
    assert_eq!(geo.edges[0].points.len(), 3);
}

#[test]
fn test_edge_name_without_endpoints() {
    let geo = parse(r#"{"bb": "0,0,10,10", "edges": [{"pos": "1,1 1,5"}]}"#, 72.0).unwrap();
    assert_eq!(geo.edges[0].name, "edge 0");
    assert!(geo.nodes.is_empty());
}

#[test]
fn test_invalid_json() {
    assert!(matches!(parse("{not json", 72.0), Err(Error::Json(_))));
    assert!(matches!(parse(r#"{"objects": []}"#, 72.0), Err(Error::Json(_))));
}

#[test]
fn test_bad_bounding_box_aborts() {
    let src = r#"{"bb": "1,0,10,10", "objects": [{"name": "a", "pos": "1,1"}]}"#;
    assert!(matches!(parse(src, 72.0), Err(Error::BoundingBox { .. })));
}

#[test]
fn test_bad_node_position_aborts() {
    let src = r#"{"bb": "0,0,10,10", "objects": [{"name": "a", "pos": "1;1"}]}"#;
    assert!(matches!(parse(src, 72.0), Err(Error::Point { .. })));
}
