use crate::autograd::graph::{topological_sort, NodeId};
use crate::ops::traits::GradNumeric;
use crate::value::Value;
use std::collections::HashSet;

/// Nodes and operand edges reachable from a root value.
///
/// `nodes` is in topological order (operands first). Each edge is
/// `(operand, consumer)` and appears once even when the consumer uses the
/// operand twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Collects the subgraph reachable from `root` by following operand edges.
///
/// # Panics
/// If `root` was dropped by [`Tape::truncate`](crate::Tape::truncate).
pub fn trace<T: GradNumeric>(root: &Value<T>) -> Trace {
    if !root.is_live() {
        panic!("Value node {} was truncated from its tape", root.id());
    }
    let nodes = root.tape().read();
    let order = topological_sort(&nodes, root.id());
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for &id in &order {
        for input in nodes[id].op.inputs() {
            if seen.insert((input, id)) {
                edges.push((input, id));
            }
        }
    }
    Trace {
        nodes: order,
        edges,
    }
}

/// Renders the subgraph reachable from `root` as Graphviz DOT text.
///
/// Every value becomes a record node showing its label, data and gradient.
/// Every non-leaf value gets an extra small node for the operation that
/// produced it, with edges running from operands to the operation and from the
/// operation to its result.
pub fn to_dot<T: GradNumeric>(root: &Value<T>) -> String {
    let graph = trace(root);
    let nodes = root.tape().read();

    let mut dot = String::from("digraph {\n  rankdir=LR;\n");
    for &id in &graph.nodes {
        let node = &nodes[id];
        let label = escape_record(node.label.as_deref().unwrap_or(""));
        dot.push_str(&format!(
            "  n{} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];\n",
            id, label, node.data, node.grad
        ));
        if !node.op.is_leaf() {
            dot.push_str(&format!("  n{}_op [label=\"{}\"];\n", id, node.op.label()));
            dot.push_str(&format!("  n{}_op -> n{};\n", id, id));
        }
    }
    for (operand, consumer) in &graph.edges {
        dot.push_str(&format!("  n{} -> n{}_op;\n", operand, consumer));
    }
    dot.push_str("}\n");
    dot
}

/// Escapes the characters that are structural inside a DOT record label.
fn escape_record(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '\\' | '"' | '|' | '{' | '}' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tape::Tape;

    #[test]
    fn test_trace_lists_operands_before_consumers() -> Result<(), crate::GradRustError> {
        let tape = Tape::<f64>::new();
        let a = tape.leaf(2.0);
        let b = tape.leaf(-3.0);
        let c = a.mul(&b)?;
        let d = c.add(&b)?;

        let graph = trace(&d);
        assert_eq!(graph.nodes, vec![a.id(), b.id(), c.id(), d.id()]);
        assert_eq!(
            graph.edges,
            vec![(a.id(), c.id()), (b.id(), c.id()), (c.id(), d.id()), (b.id(), d.id())]
        );
        Ok(())
    }

    #[test]
    fn test_trace_dedups_repeated_operand_edges() -> Result<(), crate::GradRustError> {
        let tape = Tape::<f64>::new();
        let x = tape.leaf(3.0);
        let y = x.mul(&x)?;
        let graph = trace(&y);
        assert_eq!(graph.nodes, vec![x.id(), y.id()]);
        assert_eq!(graph.edges, vec![(x.id(), y.id())]);
        Ok(())
    }

    #[test]
    fn test_trace_ignores_unreachable_nodes() {
        let tape = Tape::<f64>::new();
        let _unused = tape.leaf(1.0);
        let x = tape.leaf(2.0);
        let graph = trace(&x);
        assert_eq!(graph.nodes, vec![x.id()]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_to_dot_renders_values_and_ops() -> Result<(), crate::GradRustError> {
        let tape = Tape::<f64>::new();
        let a = tape.leaf(2.0).with_label("a");
        let b = tape.leaf(0.5).with_label("b");
        let c = a.mul(&b)?.with_label("c");
        c.backward();

        let dot = to_dot(&c);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("n0 [shape=record, label=\"{ a | data 2.0000 | grad 0.5000 }\"];"));
        assert!(dot.contains("n2 [shape=record, label=\"{ c | data 1.0000 | grad 1.0000 }\"];"));
        assert!(dot.contains("n2_op [label=\"*\"];"));
        assert!(dot.contains("n0 -> n2_op;"));
        assert!(dot.contains("n1 -> n2_op;"));
        assert!(!dot.contains("n0_op"));
        Ok(())
    }

    #[test]
    fn test_to_dot_escapes_record_syntax_in_labels() {
        let tape = Tape::<f64>::new();
        let x = tape.leaf(1.0).with_label("a|{b}\"<c>");
        let dot = to_dot(&x);
        assert!(dot.contains(r#"label="{ a\|\{b\}\"\<c\> | data"#));
    }
}
