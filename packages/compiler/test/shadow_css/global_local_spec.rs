//! Global and Local Escape Tests

mod utils;
use utils::{assert_equal_css, shim};

#[test]
fn should_unwrap_global() {
    assert_eq!(shim("::global(.btn) {}", "s"), ".btn {}");
}

#[test]
fn should_unwrap_global_anywhere() {
    assert_equal_css(&shim(".a ::global(.b) .c {}", "s"), ".a[s] .b .c[s] {}");
    assert_equal_css(&shim("::global(body) .a {}", "s"), "body .a[s] {}");
    assert_equal_css(&shim(".a ::global(.b) {}", "s"), ".a[s] .b {}");
}

#[test]
fn should_keep_fragments_after_global() {
    assert_equal_css(&shim("::global(.a).b:hover {}", "s"), ".a.b:hover {}");
}

#[test]
fn should_force_local_into_the_host() {
    assert_eq!(shim("::local(.btn) {}", "s"), "[s-host] .btn {}");
    assert_equal_css(
        &shim("::global(html) ::local(.x) {}", "s"),
        "html [s-host] .x {}",
    );
}

#[test]
fn should_accept_single_colon_spelling() {
    assert_equal_css(&shim(":global(.a) .b {}", "s"), ".a .b[s] {}");
    assert_equal_css(&shim(":local(.a) {}", "s"), "[s-host] .a {}");
}

#[test]
fn should_not_treat_bare_global_as_escape() {
    assert_equal_css(&shim(".a::global {}", "s"), ".a[s]::global {}");
}

#[test]
fn should_handle_global_in_selector_lists() {
    assert_equal_css(
        &shim("::global(.dark) .a, .b {}", "s"),
        ".dark .a[s], .b[s] {}",
    );
}
