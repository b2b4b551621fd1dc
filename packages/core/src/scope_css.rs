//! Scope CSS
//!
//! Selector-prefix rewriting for component-scoped styles.
//!
//! Rules whose prelude starts with the scope marker (`& `) are rewritten so
//! they only match inside an element carrying the scope attribute, or the
//! element carrying it. Everything else passes through untouched:
//!
//! ```text
//! & .title, h1 { color: red; }
//! ```
//!
//! becomes, for the scope selector `[kremling0]`,
//!
//! ```text
//! [kremling0] .title, [kremling0].title, h1 { color: red; }
//! ```
//!
//! This is not a CSS parser. Malformed input is rewritten on a best-effort
//! basis and never produces an error.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

const SCOPE_MARKER: char = '&';

// Prelude of a scoped rule: the marker, a selector list and the opening brace
static SCOPED_PRELUDE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"& [^{}]+\{").unwrap());

// Class and id selectors can be compounded directly onto the scope selector
static SIMPLE_SELECTOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[.#]\w").unwrap());

/// Build the attribute selector for a scope attribute name.
pub fn scope_selector_for(attr: &str) -> String {
    format!("[{}]", attr)
}

/// Rewrite `css` against `scope_selector` (for example `[kremling0]`).
pub fn transform_css(css: &str, scope_selector: &str) -> String {
    ScopeCss::new().scope_css_text(css, scope_selector)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScopeCss;

impl ScopeCss {
    pub fn new() -> Self {
        ScopeCss
    }

    /// Rewrite every scoped rule prelude in `css_text`. Rule bodies and
    /// unscoped rules are copied byte for byte.
    pub fn scope_css_text(&self, css_text: &str, scope_selector: &str) -> String {
        SCOPED_PRELUDE_RE
            .replace_all(css_text, |caps: &regex::Captures| {
                self.scope_prelude(&caps[0], scope_selector)
            })
            .into_owned()
    }

    fn scope_prelude(&self, prelude: &str, scope_selector: &str) -> String {
        // Selector lists are disjunctive, so each branch is handled alone
        let branches: SmallVec<[String; 4]> = prelude
            .split(',')
            .filter_map(|branch| self.scope_branch(branch, scope_selector))
            .collect();
        format!("{} {{", branches.join(", "))
    }

    fn scope_branch(&self, branch: &str, scope_selector: &str) -> Option<String> {
        let branch = branch.trim();
        match branch.find(SCOPE_MARKER) {
            None => {
                let selector = branch.trim_end_matches('{').trim();
                if selector.is_empty() {
                    None
                } else {
                    Some(selector.to_string())
                }
            }
            Some(idx) => {
                let fragment = branch[idx + SCOPE_MARKER.len_utf8()..]
                    .trim_end_matches('{')
                    .trim();
                Some(self.scope_fragment(fragment, scope_selector))
            }
        }
    }

    /// Emit the descendant form followed by the compound form, so the rule
    /// matches whether the attribute sits on an ancestor or on the element.
    /// An empty fragment (bare `&`) counts as non-simple and still gets both.
    fn scope_fragment(&self, fragment: &str, scope_selector: &str) -> String {
        if SIMPLE_SELECTOR_RE.is_match(fragment) {
            format!(
                "{} {}, {}{}",
                scope_selector, fragment, scope_selector, fragment
            )
        } else {
            format!(
                "{} {}, {}{}",
                scope_selector, fragment, fragment, scope_selector
            )
        }
    }
}
