//! Scope CSS Tests
//!
//! Stylesheets with several rules, at-rules and odd input.

mod utils;
use utils::{assert_contains, assert_equal_css, scope};

#[test]
fn should_scope_multiple_rules_in_order() {
    let css = "
      & .wow,
      & .someRule {
        background-color: red;
      }

      & .oliver,
      & .cromwell {
        background-color: green;
      }
    ";
    let expected = "
      [kremling0] .wow, [kremling0].wow, [kremling0] .someRule, [kremling0].someRule {
        background-color: red;
      }

      [kremling0] .oliver, [kremling0].oliver, [kremling0] .cromwell, [kremling0].cromwell {
        background-color: green;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_only_touch_marked_rules() {
    let css = "body {margin:0;}& p {color:red;}h1 {font-weight:bold;}";
    assert_eq!(
        scope(css, "k3"),
        "body {margin:0;}[k3] p, p[k3] {color:red;}h1 {font-weight:bold;}"
    );
}

#[test]
fn should_leave_declarations_untouched() {
    let css = "& .a {content: \"& b\"; background: url(a,b.png);}";
    assert_eq!(
        scope(css, "k0"),
        "[k0] .a, [k0].a {content: \"& b\"; background: url(a,b.png);}"
    );
}

#[test]
fn should_pass_at_rule_preludes_through() {
    let css = "@media (max-width: 600px) {\n  & .a {\n    color: red;\n  }\n}";
    let expected = "@media (max-width: 600px) {\n  [k0] .a, [k0].a {\n    color: red;\n  }\n}";
    assert_eq!(scope(css, "k0"), expected);
}

#[test]
fn should_pass_keyframes_through() {
    let css = "@keyframes spin { from { opacity: 0; } to { opacity: 1; } }";
    assert_eq!(scope(css, "k0"), css);
}

#[test]
fn should_not_panic_on_unbalanced_braces() {
    let out = scope("& .a { color: red; & div {", "k0");
    assert_contains(&out, "[k0] .a, [k0].a {");
    assert_contains(&out, "[k0] div, div[k0] {");

    let out = scope("}}}& .b", "k0");
    assert_eq!(out, "}}}& .b");
}

#[test]
fn should_be_stable_for_identical_input() {
    let css = "& .a, .b {x:y;}\n& ul > li {x:y;}";
    let first = scope(css, "k1");
    let second = scope(css, "k1");
    assert_eq!(first, second);
    assert_equal_css(
        &first,
        "[k1] .a, [k1].a, .b {x:y;}\n[k1] ul > li, ul > li[k1] {x:y;}",
    );
}
