use povray_ast::catalog::{colour, declare, finish, finish_ref, merge, phong, pigment, sphere, union};
use povray_ast::{serialize, write_to, Node, Severity};

fn leading_units(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 2
}

fn sample_tree() -> Node {
    let mut balls = merge([sphere(&[0.0, 0.0, 0.0], 0.5), sphere(&[1.0, 0.0, 0.0], 0.5)]);
    balls.push(pigment([colour("White")]));
    balls.push(finish_ref("ballFinish"));
    union([balls, declare("shine", finish([phong(0.1)]))])
}

#[test]
fn child_lines_are_one_level_deeper_than_parent() {
    let text = sample_tree().to_pov_string().unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Every line that opens a block is followed by a line one level deeper.
    for window in lines.windows(2) {
        if window[0].ends_with('{') || window[0].ends_with('=') {
            assert_eq!(leading_units(window[1]), leading_units(window[0]) + 1, "{window:?}");
        }
    }
}

#[test]
fn every_open_brace_is_closed() {
    let text = sample_tree().to_pov_string().unwrap();
    assert_eq!(text.matches('{').count(), text.matches('}').count());
}

#[test]
fn io_sink_matches_string_sink() {
    let tree = sample_tree();
    let mut bytes = Vec::new();
    write_to(&tree, &mut bytes).unwrap();

    let mut text = String::new();
    serialize(&tree, &mut text, 0).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), text);
}

#[test]
fn empty_combinator_serializes_and_warns() {
    let tree = union([merge(Vec::new())]);
    assert_eq!(tree.to_pov_string().unwrap(), "union {\n  merge { }\n}");

    let diagnostics = tree.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn tree_survives_json_persistence() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.to_pov_string().unwrap(), tree.to_pov_string().unwrap());
}
