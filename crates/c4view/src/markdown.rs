//! Substitutes fenced diagram blocks in markdown with their rendered text art.

use crate::Dispatcher;
use regex::Regex;
use std::sync::OnceLock;

fn diagram_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```mermaid\n(.*?)```").expect("valid regex"))
}

/// Replaces every ```` ```mermaid ```` fence with a plain fence holding the rendered diagram,
/// so a downstream markdown styler keeps the art verbatim.
pub fn replace_diagram_blocks(markdown: &str, dispatcher: &Dispatcher) -> String {
    diagram_block_re()
        .replace_all(markdown, |caps: &regex::Captures<'_>| {
            let code = caps.get(1).map_or("", |m| m.as_str());
            format!("```\n{}\n```", dispatcher.render_diagram(code.trim()))
        })
        .into_owned()
}
