use super::*;

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("27.5").unwrap(), 27.5);
    assert_eq!(parse_number(" -3 ").unwrap(), -3.0);
    assert!(matches!(parse_number("abc"), Err(Error::Number { .. })));
    assert!(matches!(parse_number("inf"), Err(Error::Number { .. })));
    assert!(matches!(parse_number(""), Err(Error::Number { .. })));
}

#[test]
fn test_parse_point() {
    assert_eq!(parse_point("27,18").unwrap(), GraphPoint::new(27.0, 18.0));
    assert_eq!(parse_point("1.5,-2").unwrap(), GraphPoint::new(1.5, -2.0));
}

#[test]
fn test_parse_point_arity() {
    assert!(matches!(parse_point("27"), Err(Error::Point { .. })));
    assert!(matches!(parse_point("1,2,3"), Err(Error::Point { .. })));
}

#[test]
fn test_parse_point_bad_number() {
    match parse_point("1,x") {
        Err(Error::Number { token }) => assert_eq!(token, "x"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_parse_bb() {
    let bb = parse_bb("0,0,100,50").unwrap();
    assert_eq!(bb.width, 100.0);
    assert_eq!(bb.height, 50.0);
    assert!(parse_bb("0,0,62.5,108").is_ok());
}

#[test]
fn test_parse_bb_rejects_offset_origin() {
    assert!(matches!(
        parse_bb("10,0,100,50"),
        Err(Error::BoundingBox { reason: "origin must be 0,0", .. })
    ));
    assert!(matches!(parse_bb("0,5,100,50"), Err(Error::BoundingBox { .. })));
}

#[test]
fn test_parse_bb_rejects_bad_shape() {
    assert!(matches!(parse_bb("0,0,100"), Err(Error::BoundingBox { .. })));
    assert!(matches!(parse_bb("0,0,0,50"), Err(Error::BoundingBox { .. })));
    assert!(matches!(parse_bb("0,0,100,-1"), Err(Error::BoundingBox { .. })));
    assert!(matches!(parse_bb("0,0,w,h"), Err(Error::Number { .. })));
}

#[test]
fn test_parse_spline_drops_markers() {
    let points = parse_spline("e,27,36.1 27,71.7 27,63.9 s,1,1 27,54.7").unwrap();
    assert_eq!(
        points,
        vec![
            GraphPoint::new(27.0, 71.7),
            GraphPoint::new(27.0, 63.9),
            GraphPoint::new(27.0, 54.7),
        ]
    );
}

#[test]
fn test_parse_spline_empty() {
    assert!(parse_spline("").unwrap().is_empty());
    assert!(parse_spline("e,1,2").unwrap().is_empty());
}

#[test]
fn test_parse_spline_bad_token_fails_whole_edge() {
    assert!(parse_spline("1,2 3,oops 5,6").is_err());
}

#[test]
fn test_parse_dimension() {
    assert_eq!(parse_dimension(None, 72.0).unwrap(), 0.0);
    assert_eq!(
        parse_dimension(Some(&Dimension::Text("0.5".to_string())), 72.0).unwrap(),
        36.0
    );
    assert_eq!(parse_dimension(Some(&Dimension::Number(2.0)), 72.0).unwrap(), 144.0);
    assert_eq!(parse_dimension(Some(&Dimension::Number(2.0)), 1.0).unwrap(), 2.0);
    assert!(parse_dimension(Some(&Dimension::Text("wide".to_string())), 72.0).is_err());
}
