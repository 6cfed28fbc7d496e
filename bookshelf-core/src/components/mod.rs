//! HTML components with encapsulated styles
//!
//! Each component renders a root element carrying `data-scope="<name>"` and
//! ships a stylesheet whose selectors are all rewritten to live under that
//! scope, so component styles cannot leak into (or be hit by) the rest of the
//! page. `:host` in a component stylesheet refers to the root element itself.

mod detail;
mod preview;

pub use detail::{subtitle, BookDetail, DetailData};
pub use preview::BookPreview;

/// A renderable piece of UI with its own scoped stylesheet
pub trait Component {
    /// Scope name placed on the root element
    const SCOPE: &'static str;

    /// Unscoped component CSS; see [`scope_css`]
    fn style() -> &'static str;

    /// Render the component's HTML
    fn render(&self) -> String;

    /// The component stylesheet with every selector confined to [`Component::SCOPE`]
    fn scoped_style() -> String {
        scope_css(Self::SCOPE, Self::style())
    }
}

/// Rewrite a flat stylesheet so each selector only matches inside `scope`
///
/// Handles flat rule lists (no nested at-rules). `:host` maps to the scope root,
/// `:host([attr])` to the root carrying that attribute.
pub fn scope_css(scope: &str, css: &str) -> String {
    let root = format!("[data-scope=\"{scope}\"]");
    let mut out = String::new();

    for rule in css.split('}') {
        let Some((selectors, body)) = rule.split_once('{') else {
            continue;
        };
        let scoped: Vec<String> = selectors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|selector| scope_selector(&root, selector))
            .collect();
        if scoped.is_empty() {
            continue;
        }
        out.push_str(&scoped.join(", "));
        out.push_str(" {");
        out.push_str(&compact_declarations(body));
        out.push_str(" }\n");
    }

    out
}

fn scope_selector(root: &str, selector: &str) -> String {
    if let Some(rest) = selector.strip_prefix(":host(") {
        // :host([open]) .x -> [data-scope="..."][open] .x
        match rest.split_once(')') {
            Some((inner, tail)) => format!("{root}{inner}{tail}"),
            None => format!("{root} {selector}"),
        }
    } else if let Some(tail) = selector.strip_prefix(":host") {
        format!("{root}{tail}")
    } else {
        // The root element itself may carry the class being styled
        format!("{root}{selector}, {root} {selector}")
    }
}

fn compact_declarations(body: &str) -> String {
    body.split(';')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| format!(" {d};"))
        .collect()
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_host_rules() {
        let css = scope_css("card", ":host { display: none; } :host([open]) { display: flex; }");
        assert_eq!(
            css,
            "[data-scope=\"card\"] { display: none; }\n\
             [data-scope=\"card\"][open] { display: flex; }\n"
        );
    }

    #[test]
    fn test_scope_class_rules() {
        let css = scope_css("card", ".title, .author:hover { margin: 0 }");
        assert_eq!(
            css.trim_end(),
            "[data-scope=\"card\"].title, [data-scope=\"card\"] .title, \
             [data-scope=\"card\"].author:hover, [data-scope=\"card\"] .author:hover { margin: 0; }"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }
}
