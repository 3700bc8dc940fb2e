use crate::node_data::NodeData;

/// Stable index of a node within its [`Tape`](crate::Tape).
pub type NodeId = usize;

/// Depth-first post-order of every node reachable from `root`.
///
/// A node is recorded only after all of its operands have been recorded, and
/// each node appears exactly once even when reachable through several paths.
/// Iterating the result in reverse therefore visits every consumer of a node
/// before the node itself.
///
/// The traversal uses an explicit stack, so deep graphs (long chains of
/// operations) do not exhaust the call stack. Operands always have smaller
/// ids than their consumers, so the visited set is a bitset over `0..=root`
/// only; nodes recorded after `root` cost nothing.
pub(crate) fn topological_sort<T>(nodes: &[NodeData<T>], root: NodeId) -> Vec<NodeId>
where
    T: crate::ops::traits::GradNumeric,
{
    let mut visited = vec![false; root + 1];
    let mut sorted = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted.push(id);
            continue;
        }
        if visited[id] {
            continue;
        }
        visited[id] = true;
        stack.push((id, true));
        // Reversed so operands are visited in their forward order.
        for input in nodes[id].op.inputs().into_iter().rev() {
            if !visited[input] {
                stack.push((input, false));
            }
        }
    }
    sorted
}
