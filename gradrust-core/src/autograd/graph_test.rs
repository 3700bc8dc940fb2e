use crate::autograd::graph::topological_sort;
use crate::error::GradRustError;
use crate::tape::Tape;

#[test]
fn test_topological_sort_single_leaf() {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(1.0);
    let sorted = topological_sort(&tape.read(), x.id());
    assert_eq!(sorted, vec![x.id()]);
}

#[test]
fn test_topological_sort_diamond_visits_each_node_once() -> Result<(), GradRustError> {
    // x feeds both a and b, which both feed d.
    let tape = Tape::<f64>::new();
    let x = tape.leaf(2.0);
    let a = x.mul(3.0)?;
    let b = x.tanh()?;
    let d = a.add(&b)?;

    let sorted = topological_sort(&tape.read(), d.id());
    let all_reachable = tape.len();
    assert_eq!(sorted.len(), all_reachable);

    let position = |id| sorted.iter().position(|&n| n == id).unwrap();
    for node in [&x, &a, &b, &d] {
        for operand in node.operands() {
            assert!(
                position(operand.id()) < position(node.id()),
                "operand {} must come before node {}",
                operand.id(),
                node.id()
            );
        }
    }
    assert_eq!(*sorted.last().unwrap(), d.id());
    Ok(())
}

#[test]
fn test_topological_sort_skips_unreachable_nodes() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(1.0);
    let unrelated = tape.leaf(5.0).mul(2.0)?;
    let y = x.relu()?;
    let sorted = topological_sort(&tape.read(), y.id());
    assert_eq!(sorted, vec![x.id(), y.id()]);
    assert!(!sorted.contains(&unrelated.id()));
    Ok(())
}

#[test]
fn test_topological_sort_deep_chain_does_not_recurse() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let mut x = tape.leaf(0.0);
    for _ in 0..100_000 {
        x = x.add(1.0)?;
    }
    let sorted = topological_sort(&tape.read(), x.id());
    // Each step adds one promoted leaf and one sum.
    assert_eq!(sorted.len(), 200_001);
    x.backward();
    assert_eq!(x.data(), 100_000.0);
    Ok(())
}

#[test]
fn test_topological_sort_ignores_nodes_recorded_after_root() -> Result<(), GradRustError> {
    let tape = Tape::<f64>::new();
    let x = tape.leaf(1.5);
    let y = x.tanh()?;
    for _ in 0..50 {
        x.mul(2.0)?;
    }
    let sorted = topological_sort(&tape.read(), y.id());
    assert_eq!(sorted, vec![x.id(), y.id()]);
    Ok(())
}
