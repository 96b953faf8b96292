use super::*;

#[test]
fn feature_button_class_marks_inactive_as_outline() {
    assert_eq!(feature_button_class(true), "btn feature-bar__btn");
    assert_eq!(feature_button_class(false), "btn btn--outline feature-bar__btn");
}
