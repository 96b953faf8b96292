use super::*;

#[test]
fn node_class_reflects_status() {
    assert_eq!(node_class(NodeStatus::Verified), "node node--verified");
    assert_eq!(node_class(NodeStatus::Pending), "node node--pending");
}

#[test]
fn node_title_names_id_and_status() {
    let node = NetworkNode { id: 3, status: NodeStatus::Pending, timestamp_ms: 0 };
    assert_eq!(node_title(&node), "Node 3 (pending)");
}
