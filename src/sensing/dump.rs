use crate::platform::AccessibilityNode;

/// Indented one-line-per-node rendering of a snapshot, for debug logs.
pub fn dump_tree<N: AccessibilityNode>(root: &N) -> String {
    let mut out = String::new();
    dump_into(&mut out, "", root);
    out
}

fn dump_into<N: AccessibilityNode>(out: &mut String, prefix: &str, node: &N) {
    let bounds = node.bounds();
    out.push_str(&format!(
        "{}{} - {} [{},{}][{},{}]{}\n",
        prefix,
        node.text().unwrap_or("null"),
        node.view_id().unwrap_or("null"),
        bounds.left,
        bounds.top,
        bounds.right,
        bounds.bottom,
        if node.is_visible_to_user() { "" } else { " (hidden)" },
    ));

    let child_prefix = format!("{prefix}  ");
    for index in 0..node.child_count() {
        if let Some(child) = node.child(index) {
            dump_into(out, &child_prefix, child);
        }
    }
}
