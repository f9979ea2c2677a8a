use super::*;

#[test]
fn attr_values_round_trip() {
    assert_eq!(Theme::from_attr(Theme::Dark.as_attr()), Theme::Dark);
    assert_eq!(Theme::from_attr(Theme::Light.as_attr()), Theme::Light);
}

#[test]
fn unknown_attr_falls_back_to_light() {
    assert_eq!(Theme::from_attr("solarized"), Theme::Light);
    assert_eq!(Theme::from_attr(""), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_outside_browser_still_flips() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}
