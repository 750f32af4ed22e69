use crate::*;

#[test]
fn repeated_argument_groups_repeat_the_command() {
    let cases: &[(char, &[f64])] = &[
        ('L', &[1.0, 2.0]),
        ('l', &[1.0, 2.0]),
        ('H', &[3.0]),
        ('v', &[-4.0]),
        ('C', &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        ('s', &[1.0, 2.0, 3.0, 4.0]),
        ('Q', &[1.0, 2.0, 3.0, 4.0]),
        ('t', &[1.0, 2.0]),
        ('A', &[5.0, 6.0, 0.0, 1.0, 0.0, 7.0, 8.0]),
    ];

    for (letter, args) in cases {
        let group = args
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        for repeats in 1..=3 {
            let data = format!("{letter} {}", vec![group.as_str(); repeats].join(" "));
            let commands = parse_path_data(&data).unwrap();
            let expected = PathCommand::from_args(*letter as u8, args).unwrap();
            assert_eq!(commands.len(), repeats, "{data}");
            assert!(commands.iter().all(|c| *c == expected), "{data}");
        }
    }
}

#[test]
fn extra_move_pairs_become_line_commands() {
    assert_eq!(
        parse_path_data("M 1 2 3 4 5 6").unwrap(),
        vec![
            PathCommand::MoveTo { x: 1.0, y: 2.0 },
            PathCommand::LineTo { x: 3.0, y: 4.0 },
            PathCommand::LineTo { x: 5.0, y: 6.0 },
        ]
    );
    assert_eq!(
        parse_path_data("m1 2 3 4").unwrap(),
        vec![
            PathCommand::RelativeMoveTo { dx: 1.0, dy: 2.0 },
            PathCommand::RelativeLineTo { dx: 3.0, dy: 4.0 },
        ]
    );
}

#[test]
fn absolute_and_relative_moves_stay_distinct() {
    assert_eq!(
        parse_path_data("M8 8m-8 0").unwrap(),
        vec![
            PathCommand::MoveTo { x: 8.0, y: 8.0 },
            PathCommand::RelativeMoveTo { dx: -8.0, dy: 0.0 },
        ]
    );
}

#[test]
fn packed_numbers_split_on_sign_and_second_dot() {
    assert_eq!(
        parse_path_data("M10-5L.5.5").unwrap(),
        vec![
            PathCommand::MoveTo { x: 10.0, y: -5.0 },
            PathCommand::LineTo { x: 0.5, y: 0.5 },
        ]
    );
}

#[test]
fn arc_flags_may_be_glued_to_the_next_number() {
    assert_eq!(
        parse_path_data("A 5 5 0 01 10 10").unwrap(),
        vec![PathCommand::ArcTo {
            horizontal_ellipse_radius: 5.0,
            vertical_ellipse_radius: 5.0,
            theta: 0.0,
            is_more_than_half: false,
            is_positive_arc: true,
            x1: 10.0,
            y1: 10.0,
        }]
    );
    assert_eq!(
        parse_path_data("a5 5 0 1110 10").unwrap(),
        vec![PathCommand::RelativeArcTo {
            horizontal_ellipse_radius: 5.0,
            vertical_ellipse_radius: 5.0,
            theta: 0.0,
            is_more_than_half: true,
            is_positive_arc: true,
            dx1: 10.0,
            dy1: 10.0,
        }]
    );
}

#[test]
fn scientific_notation_is_accepted() {
    assert_eq!(
        parse_path_data("A 1.5e2 2.0e1 -3.14e1 1 0 1e2 2e2").unwrap(),
        vec![PathCommand::ArcTo {
            horizontal_ellipse_radius: 150.0,
            vertical_ellipse_radius: 20.0,
            theta: -31.4,
            is_more_than_half: true,
            is_positive_arc: false,
            x1: 100.0,
            y1: 200.0,
        }]
    );
}

#[test]
fn close_is_case_insensitive() {
    for data in ["M0 0z", "M0 0Z"] {
        let commands = parse_path_data(data).unwrap();
        assert_eq!(commands.last(), Some(&PathCommand::Close));
    }
}

#[test]
fn empty_data_has_no_commands() {
    assert!(parse_path_data("").unwrap().is_empty());
    assert!(parse_path_data("  \n ").unwrap().is_empty());
}

#[test]
fn unknown_command_reports_letter_and_offset() {
    assert_eq!(
        parse_path_data("M0 0 X 1 2").unwrap_err(),
        Error::UnknownPathCommand {
            command: 'X',
            offset: 5
        }
    );
}

#[test]
fn truncated_and_orphan_numbers_are_malformed() {
    for data in ["M 10", "10 20", "M 0 0 L 1 #"] {
        assert!(
            matches!(
                parse_path_data(data),
                Err(Error::MalformedPathData { .. })
            ),
            "{data}"
        );
    }
}

#[test]
fn overflowing_numbers_are_malformed() {
    match parse_path_data("M 1e400 2 L 3 4") {
        Err(Error::MalformedPathData { message, near }) => {
            assert!(message.contains("1e400"), "{message}");
            assert!(near.starts_with("1e400"), "{near}");
        }
        other => panic!("expected MalformedPathData, got {other:?}"),
    }
    assert!(matches!(
        parse_path_data("M 0 0 L -1e309 0"),
        Err(Error::MalformedPathData { .. })
    ));
    assert!(matches!(
        parse_svg(r#"<svg><path d="M 1e400 2 L 3 4"/></svg>"#),
        Err(Error::MalformedPathData { .. })
    ));
}

#[test]
fn command_classification() {
    let commands = parse_path_data("M0 0 l1 1 Z").unwrap();
    assert!(commands[0].is_move());
    assert!(!commands[0].is_relative());
    assert!(commands[1].is_relative());
    assert_eq!(PathCommand::arity(b'c'), Some(6));
    assert_eq!(PathCommand::arity(b'x'), None);
}
