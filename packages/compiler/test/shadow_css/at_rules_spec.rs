//! At Rules Tests

mod utils;
use utils::{assert_equal_css, shim};

#[test]
fn should_handle_media_rules_with_simple_rules() {
    let css = "@media screen and (max-width: 800px) {div {font-size: 50px;}} div {}";
    let expected = "@media screen and (max-width:800px) {div[s] {font-size:50px;}} div[s] {}";
    assert_equal_css(&shim(css, "s"), expected);
}

#[test]
fn should_handle_media_rules_with_both_width_and_height() {
    let css = "@media screen and (max-width:800px, max-height:100%) {div {font-size:50px;}}";
    let expected = "@media screen and (max-width:800px, max-height:100%) {div[s] {font-size:50px;}}";
    assert_equal_css(&shim(css, "s"), expected);
}

#[test]
fn should_preserve_page_rules() {
    let css = "
        @page {
          margin-right: 4in;

          @top-left {
            content: \"Hamlet\";
          }

          @top-right {
            content: \"Page \" counter(page);
          }
        }

        @page main {
          margin-left: 4in;
        }

        @page :left {
          margin-left: 3cm;
          margin-right: 4cm;
        }
      ";
    let result = shim(css, "s");
    assert_eq!(result, css);
}

#[test]
fn should_preserve_font_face_rules() {
    let css = "@font-face { font-family: x; src: url(\"x.woff2\") format(\"woff2\"); }";
    assert_eq!(shim(css, "s"), css);
}

#[test]
fn should_handle_support_rules() {
    let css = "@supports (display: flex) {section {display: flex;}}";
    let expected = "@supports (display:flex) {section[s] {display:flex;}}";
    assert_equal_css(&shim(css, "s"), expected);
}

#[test]
fn should_pass_through_import_directives() {
    let style_str = "@import url(\"https://fonts.googleapis.com/css?family=Roboto\");";
    assert_eq!(shim(style_str, "s"), style_str);
}

#[test]
fn should_shim_rules_after_import() {
    let style_str = "@import url(\"a\"); div {}";
    assert_equal_css(&shim(style_str, "s"), "@import url(\"a\"); div[s] {}");
}

#[test]
fn should_shim_rules_with_quoted_content_after_import() {
    let style_str = "@import url(\"a\"); div {background-image: url(\"a.jpg\"); color: red;}";
    assert_equal_css(
        &shim(style_str, "s"),
        "@import url(\"a\"); div[s] {background-image:url(\"a.jpg\"); color:red;}",
    );
}

#[test]
fn should_pass_through_import_directives_whose_url_contains_colons_and_semicolons() {
    let style_str = "@import url(\"https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap\");";
    assert_eq!(shim(style_str, "s"), style_str);
}

#[test]
fn should_shim_rules_after_import_with_colons_and_semicolons() {
    let style_str = "@import url(\"https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap\"); div {}";
    assert_equal_css(
        &shim(style_str, "s"),
        "@import url(\"https://fonts.googleapis.com/css2?family=Roboto:wght@400;500&display=swap\"); div[s] {}",
    );
}

#[test]
fn should_scope_normal_selectors_inside_a_named_container_rule() {
    let css = "
          @container card (max-width: 500px) {
               .item {
                 color: red;
               }
          }";
    assert_equal_css(
        &shim(css, "s"),
        "@container card (max-width: 500px) {
          .item[s] {
            color: red;
          }
        }",
    );
}

#[test]
fn should_scope_normal_selectors_inside_a_scope_rule_with_scoping_limits() {
    let css = "
          @scope (.media-object) to (.content > *) {
              img { border-radius: 50%; }
              .content { padding: 1em; }
          }";
    assert_equal_css(
        &shim(css, "s"),
        "@scope (.media-object) to (.content > *) {
          img[s] { border-radius: 50%; }
          .content[s] { padding: 1em; }
        }",
    );
}

#[test]
fn should_handle_layer_rules() {
    let css = "@layer base, utilities; @layer utilities {section {display: flex;}}";
    let expected = "@layer base, utilities; @layer utilities {section[s] {display:flex;}}";
    assert_equal_css(&shim(css, "s"), expected);
}

#[test]
fn should_scope_normal_selectors_inside_a_starting_style_rule() {
    let css = "
          @starting-style {
              img { border-radius: 50%; }
              .content { padding: 1em; }
          }";
    assert_equal_css(
        &shim(css, "s"),
        "@starting-style {
          img[s] { border-radius: 50%; }
          .content[s] { padding: 1em; }
        }",
    );
}

#[test]
fn should_scope_host_inside_media_rules() {
    let css = "@media print { :host { display: none; } }";
    assert_eq!(shim(css, "s"), "@media print { [s-host] { display: none; } }");
}

#[test]
fn should_keep_charset_and_namespace_statements() {
    let css = "@charset \"utf-8\";\n@namespace svg url(http://www.w3.org/2000/svg);\nsvg|a {}";
    let result = shim(css, "s");
    assert!(result.starts_with("@charset \"utf-8\";\n@namespace svg url(http://www.w3.org/2000/svg);\n"));
}

#[test]
fn should_not_scope_custom_property_blocks() {
    assert_eq!(
        shim(".a { --x: { color: red }; }", "s"),
        ".a[s] { --x: { color: red }; }"
    );
}
