use pathfinder_core::{Direction, Node};

/// Append the 4-directional (cardinal) neighbours of `p` to `buf`, keeping
/// only those for which `keep` returns `true`.
pub fn push_cardinal(p: Node, buf: &mut Vec<Node>, keep: impl Fn(Node) -> bool) {
    for d in Direction::CARDINAL {
        let n = p.step(d);
        if keep(n) {
            buf.push(n);
        }
    }
}

/// Append the 8-directional neighbours of `p` to `buf`, keeping only those
/// for which `keep` returns `true`.
pub fn push_all(p: Node, buf: &mut Vec<Node>, keep: impl Fn(Node) -> bool) {
    buf.extend(p.neighbours_8().into_iter().filter(|&n| keep(n)));
}
