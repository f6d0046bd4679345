//! Host and Host-Context Tests

mod utils;
use shadow_scope_compiler::shadow_css::ScopeContext;
use utils::{assert_equal_css, shim, shim_with};

mod host {
    use super::*;

    #[test]
    fn should_handle_no_context() {
        assert_eq!(shim(":host {}", "scope"), "[scope-host] {}");
    }

    #[test]
    fn should_handle_tag_selector() {
        assert_equal_css(&shim(":host(ul) {}", "s"), "ul[s-host] {}");
    }

    #[test]
    fn should_handle_class_selector() {
        assert_equal_css(&shim(":host(.x) {}", "s"), "[s-host].x {}");
    }

    #[test]
    fn should_handle_attribute_selector() {
        assert_equal_css(&shim(":host([a=\"b\"]) {}", "s"), "[s-host][a=\"b\"] {}");
    }

    #[test]
    fn should_handle_compound_refinement() {
        assert_equal_css(&shim(":host(ul.x#y) {}", "s"), "ul[s-host].x#y {}");
    }

    #[test]
    fn should_handle_pseudo_selectors() {
        assert_equal_css(&shim(":host(:before) {}", "s"), "[s-host]:before {}");
        assert_equal_css(&shim(":host:hover {}", "s"), "[s-host]:hover {}");
    }

    #[test]
    fn should_scope_descendants_but_not_the_host() {
        assert_equal_css(&shim(":host .a {}", "s"), "[s-host] .a[s] {}");
        assert_equal_css(&shim(":host > .a .b {}", "s"), "[s-host] > .a .b[s] {}");
    }

    #[test]
    fn should_handle_selector_lists() {
        assert_equal_css(&shim(":host, .a {}", "s"), "[s-host], .a[s] {}");
    }

    #[test]
    fn should_handle_uppercase_names() {
        assert_equal_css(&shim(":HOST {}", "s"), "[s-host] {}");
    }

    #[test]
    fn should_substitute_the_component_token() {
        let context = ScopeContext::new("_x-card")
            .unwrap()
            .with_component_token("x-card");
        assert_eq!(shim_with(":host {}", context.clone()), "x-card {}");
        assert_eq!(
            shim_with(":host(.big) .title {}", context),
            "x-card.big .title[_x-card] {}"
        );
    }
}

mod host_context {
    use super::*;

    #[test]
    fn should_expand_to_an_ancestor() {
        assert_eq!(
            shim(":host-context(.dark) .item {}", "s"),
            ".dark [s-host] .item[s] {}"
        );
    }

    #[test]
    fn should_handle_no_descendant() {
        assert_equal_css(&shim(":host-context(.x) {}", "s"), ".x [s-host] {}");
    }

    #[test]
    fn should_handle_tag_context() {
        assert_equal_css(
            &shim(":host-context(body.rtl) span {}", "s"),
            "body.rtl [s-host] span[s] {}",
        );
    }

    #[test]
    fn should_trim_argument_whitespace() {
        assert_equal_css(&shim(":host-context( .x ) {}", "s"), ".x [s-host] {}");
    }

    #[test]
    fn should_keep_other_fragments_of_the_part() {
        assert_equal_css(
            &shim(":host-context(.x):hover {}", "s"),
            ".x [s-host]:hover {}",
        );
    }
}
