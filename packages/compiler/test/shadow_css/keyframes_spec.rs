//! Keyframes and Animations Tests

mod utils;
use utils::{assert_contains, assert_equal_css, assert_not_contains, shim};

#[test]
fn should_scope_keyframes_rules() {
    let css = "@keyframes foo {0% {transform:translate(-50%) scaleX(0);}}";
    let expected = "@keyframes foo_host-a {0% {transform:translate(-50%) scaleX(0);}}";
    assert_eq!(shim(css, "_host-a"), expected);
}

#[test]
fn should_join_with_a_dash_when_the_scope_has_no_separator() {
    let css = "@keyframes spin { 0% {} 100% {} } .x { animation: spin 2s; }";
    assert_eq!(
        shim(css, "s"),
        "@keyframes spin-s { 0% {} 100% {} } .x[s] { animation: spin-s 2s; }"
    );
}

#[test]
fn should_scope_webkit_keyframes_rules() {
    let css = "@-webkit-keyframes foo {0% {-webkit-transform:translate(-50%) scaleX(0);}} ";
    let expected =
        "@-webkit-keyframes foo_host-a {0% {-webkit-transform:translate(-50%) scaleX(0);}} ";
    assert_eq!(shim(css, "_host-a"), expected);
}

#[test]
fn should_not_scope_keyframe_selectors() {
    let css = "@keyframes foo { from { a: b } 50% { a: c } to { a: d } }";
    assert_equal_css(
        &shim(css, "s"),
        "@keyframes foo-s {from {a:b} 50% {a:c} to {a:d}}",
    );
}

#[test]
fn should_scope_animations_using_local_keyframes_identifiers() {
    let css = "
        button {
            animation: foo 10s ease;
        }
        @keyframes foo {
            0% {
            transform: translate(-50%) scaleX(0);
            }
        }
        ";
    let result = shim(css, "_host-a");
    assert_contains(&result, "animation: foo_host-a 10s ease;");
    assert_contains(&result, "@keyframes foo_host-a {");
}

#[test]
fn should_not_scope_animations_using_non_local_keyframes_identifiers() {
    let css = "
        button {
            animation: foo 10s ease;
        }
        ";
    let result = shim(css, "_host-a");
    assert_contains(&result, "animation: foo 10s ease;");
}

#[test]
fn should_scope_animation_names_using_local_keyframes_identifiers() {
    let css = "
        button {
            animation-name: foo;
        }
        @keyframes foo {
            0% {
            transform: translate(-50%) scaleX(0);
            }
        }
        ";
    let result = shim(css, "_host-a");
    assert_contains(&result, "animation-name: foo_host-a;");
}

#[test]
fn should_not_scope_animation_names_using_non_local_keyframes_identifiers() {
    let css = "
        button {
            animation-name: foo;
        }
        ";
    let result = shim(css, "_host-a");
    assert_contains(&result, "animation-name: foo;");
}

#[test]
fn should_handle_scope_or_not_multiple_animation_names() {
    let css = "
        button {
            animation-name: foo, bar,baz, qux , quux ,corge ,grault ,garply, waldo;
        }
        @keyframes foo {}
        @keyframes baz {}
        @keyframes quux {}
        @keyframes grault {}
        @keyframes waldo {}";
    let result = shim(css, "_host-a");
    let expected = "animation-name: foo_host-a, bar,baz_host-a, qux , quux_host-a ,corge ,grault_host-a ,garply, waldo_host-a;";
    assert_contains(&result, expected);
}

#[test]
fn should_handle_scope_or_not_multiple_animation_names_defined_over_multiple_lines() {
    let css = "
        button {
            animation-name: foo,
                            bar,baz,
                            qux ,
                            quux ,
                            grault,
                            garply, waldo;
        }
        @keyframes foo {}
        @keyframes baz {}
        @keyframes quux {}
        @keyframes grault {}";
    let result = shim(css, "_host-a");
    for scoped in &["foo", "baz", "quux", "grault"] {
        assert_contains(&result, &format!("{}_host-a", scoped));
    }
    for non_scoped in &["bar", "qux", "garply", "waldo"] {
        assert_contains(&result, non_scoped);
        assert_not_contains(&result, &format!("{}_host-a", non_scoped));
    }
}

#[test]
fn should_handle_entries_without_a_preceding_space() {
    let css = ".test {
      animation:my-anim 1s,my-anim2 2s, my-anim3 3s,my-anim4 4s;
    }

    @keyframes my-anim {
      0% {color: red}
      100% {color: blue}
    }

    @keyframes my-anim2 {
      0% {font-size: 1em}
      100% {font-size: 1.2em}
    }
    ";
    let result = shim(css, "_c");
    assert_contains(
        &result,
        "animation:my-anim_c 1s,my-anim2_c 2s, my-anim3 3s,my-anim4 4s;",
    );
    assert_contains(&result, "@keyframes my-anim_c {");
    assert_contains(&result, "@keyframes my-anim2_c {");
}

#[test]
fn should_resolve_forward_and_backward_references() {
    let css = ".a { animation-name: late; } @keyframes early {} @keyframes late {} .b { animation: early 1s; }";
    let result = shim(css, "s");
    assert_contains(&result, ".a[s] { animation-name: late-s; }");
    assert_contains(&result, ".b[s] { animation: early-s 1s; }");
}

#[test]
fn should_not_confuse_keywords_with_names() {
    let css = "@keyframes slide {} .a { animation: ease-in 1s infinite slide; }";
    assert_contains(
        &shim(css, "s"),
        "animation: ease-in 1s infinite slide-s;",
    );
}

#[test]
fn should_not_split_function_arguments() {
    let css = "@keyframes pulse {} .a { animation: 1s cubic-bezier(0.1, 0.7, 1, 0.1) pulse, 2s steps(4, end) pulse; }";
    assert_contains(
        &shim(css, "s"),
        "animation: 1s cubic-bezier(0.1, 0.7, 1, 0.1) pulse-s, 2s steps(4, end) pulse-s;",
    );
}

#[test]
fn should_scope_vendor_prefixed_animations() {
    let css = "@-webkit-keyframes k {} .a { -webkit-animation: k 1s; -webkit-animation-name: k; }";
    let result = shim(css, "s");
    assert_contains(&result, "-webkit-animation: k-s 1s;");
    assert_contains(&result, "-webkit-animation-name: k-s;");
}

#[test]
fn should_scope_quoted_keyframes_names() {
    let css = "@keyframes \"fade in\" {} .a { animation-name: \"fade in\"; } .b { animation: 'fade in' 1s; }";
    let result = shim(css, "s");
    assert_contains(&result, "@keyframes \"fade in-s\" {}");
    assert_contains(&result, "animation-name: \"fade in-s\";");
    assert_contains(&result, "animation: 'fade in-s' 1s;");
}

#[test]
fn should_scope_keyframes_nested_in_at_rules() {
    let css = "@media (min-width: 1px) { @keyframes k {} } .a { animation: k 1s; }";
    let result = shim(css, "s");
    assert_contains(&result, "@keyframes k-s {}");
    assert_contains(&result, "animation: k-s 1s;");
}

#[test]
fn should_leave_other_declarations_alone() {
    let css = "@keyframes k {} .a { transition: k 1s; content: 'k'; }";
    assert_contains(&shim(css, "s"), "transition: k 1s; content: 'k';");
}

#[test]
fn should_ignore_names_inside_comments_in_animation_values() {
    let css = ".a { animation: /* spin */ fade 1s; } @keyframes spin {} @keyframes fade {}";
    assert_eq!(
        shim(css, "s"),
        ".a[s] { animation: /* spin */ fade-s 1s; } @keyframes spin-s {} @keyframes fade-s {}"
    );
}
