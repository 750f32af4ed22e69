use crate::*;

#[test]
fn hex_short_forms_expand_by_doubling_digits() {
    assert_eq!(
        Color::from_hex("#ABC").unwrap(),
        Color::from_hex("#AABBCC").unwrap()
    );
    assert_eq!(Color::from_hex("#ABC").unwrap().argb(), 0xFFAABBCC);
    assert_eq!(
        Color::from_hex("#1234").unwrap(),
        Color::from_hex("#11223344").unwrap()
    );
}

#[test]
fn hex_with_trailing_alpha_moves_alpha_to_the_front() {
    assert_eq!(Color::from_hex("#FF000080").unwrap().argb(), 0x80FF0000);
    assert_eq!(Color::from_hex("#11223344").unwrap().argb(), 0x44112233);
    assert_eq!(Color::from_hex("ffc107").unwrap().argb(), 0xFFFFC107);
}

#[test]
fn hex_rejects_bad_lengths_and_digits() {
    for bad in ["#12345", "#", "#1234567", "#GGG"] {
        assert!(
            matches!(Color::from_hex(bad), Err(Error::InvalidColorFormat { .. })),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn rgb_channels_are_range_checked() {
    assert_eq!(
        Color::from_rgba(256, 0, 0, 255).unwrap_err(),
        Error::ChannelOutOfRange {
            channel: "red",
            value: 256
        }
    );
    assert!(matches!(
        Color::from_rgb(0, -1, 0),
        Err(Error::ChannelOutOfRange {
            channel: "green",
            ..
        })
    ));
    assert_eq!(Color::from_rgb(1, 2, 3).unwrap().argb(), 0xFF010203);
}

#[test]
fn parse_color_handles_none_keywords_and_functions() {
    assert_eq!(parse_color("none").unwrap(), None);
    assert_eq!(parse_color(" Transparent ").unwrap(), None);
    assert_eq!(parse_color("currentColor").unwrap(), Some(Color::BLACK));
    assert_eq!(parse_color("Orange").unwrap().unwrap().argb(), 0xFFFFA500);
    assert_eq!(parse_color("green").unwrap().unwrap().argb(), 0xFF008000);
    assert_eq!(parse_color("#f00").unwrap().unwrap().argb(), 0xFFFF0000);
    assert_eq!(
        parse_color("rgb(255, 0, 0)").unwrap().unwrap().argb(),
        0xFFFF0000
    );
    assert_eq!(
        parse_color("rgba(255,0,0,0.5)").unwrap().unwrap().argb(),
        0x80FF0000
    );
    assert_eq!(
        parse_color("rgb(100%, 0%, 0%)").unwrap().unwrap().argb(),
        0xFFFF0000
    );
    assert_eq!(
        parse_color("hsl(120, 100%, 50%)").unwrap().unwrap().argb(),
        0xFF00FF00
    );
}

#[test]
fn parse_color_rejects_unknown_syntax() {
    assert!(matches!(
        parse_color("bogus"),
        Err(Error::UnsupportedColorFormat { .. })
    ));
    assert!(matches!(
        parse_color("rgb(1, 2)"),
        Err(Error::UnsupportedColorFormat { .. })
    ));
    assert!(matches!(
        parse_color("rgb(300, 0, 0)"),
        Err(Error::ChannelOutOfRange { .. })
    ));
}

#[test]
fn keyword_table_is_sorted_and_case_insensitive() {
    assert_eq!(Color::from_keyword("AliceBlue").unwrap().argb(), 0xFFF0F8FF);
    assert_eq!(Color::from_keyword("yellowgreen").unwrap().argb(), 0xFF9ACD32);
    assert_eq!(Color::from_keyword("grey"), Color::from_keyword("gray"));
    assert!(Color::from_keyword("notacolor").is_none());
}

#[test]
fn compose_name_ignores_alpha() {
    assert_eq!(Color::from_argb(0xFFFF0000).compose_name(), Some("Red"));
    assert_eq!(Color::from_argb(0x80FF0000).compose_name(), Some("Red"));
    assert_eq!(Color::from_argb(0xFF444444).compose_name(), Some("DarkGray"));
    assert_eq!(Color::from_argb(0xFF008000).compose_name(), None);
}

#[test]
fn opacity_scales_alpha_with_truncation() {
    let red = Color::from_argb(0xFFFF0000);
    assert_eq!(red.with_opacity(0.8).argb(), 0xCCFF0000);
    assert_eq!(red.with_opacity(0.5).alpha(), 127);
    assert_eq!(red.with_opacity(2.0), red);
    assert_eq!(red.to_string(), "#FF0000FF");
}
