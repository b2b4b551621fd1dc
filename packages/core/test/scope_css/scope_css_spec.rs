//! Scope CSS Tests
//!
//! Single-rule rewriting.

mod utils;
use utils::{assert_equal_css, scope};

#[test]
fn should_handle_empty_string() {
    assert_eq!(scope("", "kremling0"), "");
}

#[test]
fn should_scope_a_class_rule() {
    let css = "
      & .someRule {
        background-color: red;
      }
    ";
    let expected = "
      [kremling0] .someRule, [kremling0].someRule {
        background-color: red;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_scope_a_compact_rule() {
    assert_eq!(
        scope("& .someRule {bg:red;}", "kremling0"),
        "[kremling0] .someRule, [kremling0].someRule {bg:red;}"
    );
}

#[test]
fn should_suffix_non_class_or_id_selectors() {
    let css = "
      & div {
        background-color: pink;
      }
    ";
    let expected = "
      [kremling0] div, div[kremling0] {
        background-color: pink;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_suffix_pseudo_and_combinator_fragments() {
    assert_eq!(
        scope("& > li {a:b;}", "k0"),
        "[k0] > li, > li[k0] {a:b;}"
    );
    assert_eq!(
        scope("& [data-x] {a:b;}", "k0"),
        "[k0] [data-x], [data-x][k0] {a:b;}"
    );
}

#[test]
fn should_keep_compound_class_fragments_together() {
    assert_eq!(
        scope("& .a .b {a:b;}", "k0"),
        "[k0] .a .b, [k0].a .b {a:b;}"
    );
}

#[test]
fn should_combine_scoped_with_regular_selector() {
    let css = "
      & .someRule, .wow {
        background-color: red;
      }
    ";
    let expected = "
      [kremling0] .someRule, [kremling0].someRule, .wow {
        background-color: red;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_combine_regular_with_scoped_selector() {
    let css = "
      .wow, & .someRule {
        background-color: red;
      }
    ";
    let expected = "
      .wow, [kremling0] .someRule, [kremling0].someRule {
        background-color: red;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_scope_every_marked_selector_in_a_list() {
    let css = "
      & .wow, & .someRule {
        background-color: red;
      }
    ";
    let expected = "
      [kremling0] .wow, [kremling0].wow, [kremling0] .someRule, [kremling0].someRule {
        background-color: red;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_join_selector_lists_split_across_lines() {
    let css = "
      & .wow,
      & .someRule {
        background-color: red;
      }
    ";
    let expected = "
      [kremling0] .wow, [kremling0].wow, [kremling0] .someRule, [kremling0].someRule {
        background-color: red;
      }
    ";
    assert_equal_css(&scope(css, "kremling0"), expected);
}

#[test]
fn should_leave_global_css_unchanged() {
    let css = "
      .someRule {
        background-color: red;
      }
    ";
    assert_eq!(scope(css, "kremling0"), css);
}

#[test]
fn should_use_the_given_namespace() {
    assert_eq!(
        scope("& .someRule {bg:red;}", "kackle0"),
        "[kackle0] .someRule, [kackle0].someRule {bg:red;}"
    );
}

#[test]
fn should_require_a_space_after_the_marker() {
    let css = "&.someRule {bg:red;}";
    assert_eq!(scope(css, "kremling0"), css);
}

#[test]
fn should_emit_both_forms_for_a_bare_marker() {
    assert_eq!(scope("&  {x:y;}", "k0"), "[k0] , [k0] {x:y;}");
}

#[test]
fn should_compare_regardless_of_indentation() {
    let css = "& .a,\n& .b {\n  color: red;\n}";
    let expected = "
        [k0] .a, [k0].a, [k0] .b, [k0].b {
                color: red;
        }
    ";
    assert_equal_css(&scope(css, "k0"), expected);
}
