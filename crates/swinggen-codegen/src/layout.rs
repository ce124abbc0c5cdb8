//! Layout manager name resolution.

/// Map a layout name to a Swing layout-manager construction expression.
///
/// Case-insensitive and total: unrecognized names, `"flow"` included, fall
/// back to the default flow layout.
pub fn layout_expr(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "border" => "BorderLayout()",
        "grid" => "GridLayout()",
        _ => "FlowLayout()",
    }
}
