use beamcut_core::{Point, Segment};
use beamcut_svg::{load_paths, SvgError};

#[test]
fn test_group_transforms_compose_outer_to_inner() {
    let svg = r#"<svg>
        <g transform="translate(5,0)">
            <path transform="scale(2)" d="M1,1 L2,2"/>
        </g>
    </svg>"#;
    let paths = load_paths(svg).unwrap();
    assert_eq!(paths.len(), 1);
    // The outer translate applies after the inner scale.
    assert_eq!(paths[0].transform.apply(Point::new(1.0, 1.0)), Point::new(7.0, 2.0));
}

#[test]
fn test_paths_collect_in_document_order() {
    let svg = r#"<svg>
        <path d="M0,0 L1,0"/>
        <g>
            <path d="M2,0 L3,0"/>
            <g>
                <path d="M4,0 L5,0"/>
            </g>
        </g>
        <path d="M6,0 L7,0"/>
    </svg>"#;
    let paths = load_paths(svg).unwrap();
    let starts: Vec<f64> = paths
        .iter()
        .map(|path| match path.segments[0] {
            Segment::Line { p1, .. } => p1.x,
            _ => panic!("expected a line"),
        })
        .collect();
    assert_eq!(starts, vec![0.0, 2.0, 4.0, 6.0]);
}

#[test]
fn test_one_bad_path_fails_the_whole_document() {
    let svg = r#"<svg>
        <path d="M0,0 L1,0"/>
        <path d="M0,0 X9"/>
    </svg>"#;
    let err = load_paths(svg).unwrap_err();
    assert!(matches!(err, SvgError::UnknownCommand { command: 'X' }));
}

#[test]
fn test_root_transform_is_ignored() {
    let svg = r#"<svg transform="translate(100,100)"><path d="M1,1 L2,2"/></svg>"#;
    let paths = load_paths(svg).unwrap();
    assert_eq!(paths[0].transform.apply(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
}

#[test]
fn test_non_path_elements_are_skipped() {
    let svg = r#"<svg>
        <rect width="5" height="5"/>
        <text>label</text>
        <path d="M0,0 L1,1"/>
        <path stroke="red"/>
    </svg>"#;
    let paths = load_paths(svg).unwrap();
    assert_eq!(paths.len(), 1);
}

#[test]
fn test_paths_outside_groups_do_not_inherit() {
    let svg = r#"<svg>
        <g transform="scale(3)"><path d="M1,0 L2,0"/></g>
        <path d="M1,0 L2,0"/>
    </svg>"#;
    let paths = load_paths(svg).unwrap();
    assert_eq!(paths[0].transform.apply(Point::new(1.0, 0.0)), Point::new(3.0, 0.0));
    assert_eq!(paths[1].transform.apply(Point::new(1.0, 0.0)), Point::new(1.0, 0.0));
}

#[test]
fn test_mismatched_tags_fail() {
    let err = load_paths("<svg><g></svg>").unwrap_err();
    assert!(matches!(err, SvgError::MalformedDocument { .. }));
}

#[test]
fn test_document_without_svg_root_fails() {
    let err = load_paths("<html/>").unwrap_err();
    assert!(matches!(err, SvgError::MissingSvgRoot));
}
