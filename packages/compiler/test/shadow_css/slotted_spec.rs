//! Slotted Content Tests

mod utils;
use utils::{assert_equal_css, shim};

#[test]
fn should_rewrite_slotted_content() {
    assert_eq!(shim("::slotted(.a) {}", "s"), "slot[slotted][s] > .a {}");
}

#[test]
fn should_rewrite_slotted_after_an_ancestor() {
    assert_equal_css(
        &shim(".list ::slotted(li) {}", "s"),
        ".list[s] slot[slotted][s] > li {}",
    );
}

#[test]
fn should_rewrite_slotted_after_host() {
    assert_equal_css(
        &shim(":host ::slotted(*) {}", "s"),
        "[s-host] slot[slotted][s] > * {}",
    );
}

#[test]
fn should_keep_compound_arguments() {
    assert_equal_css(
        &shim("::slotted(span.a[b]) {}", "s"),
        "slot[slotted][s] > span.a[b] {}",
    );
}

#[test]
fn should_leave_slotted_without_arguments() {
    assert_eq!(shim("::slotted {}", "s"), "::slotted {}");
}

#[test]
fn should_use_the_custom_element_token() {
    let context = shadow_scope_compiler::ScopeContext::new("s")
        .unwrap()
        .with_element_token(|scope| format!("[_{}]", scope));
    assert_eq!(
        utils::shim_with("::slotted(p) {}", context),
        "slot[slotted][_s] > p {}"
    );
}
