use super::*;

#[test]
fn root_path() {
    let root = TreePath::root();
    assert!(root.is_root());
    assert_eq!(root.depth(), 0);
    assert_eq!(root.to_string(), "root");
}

#[test]
fn child_paths_do_not_alias_parent() {
    let root = TreePath::root();
    let first = root.child(0);
    let nested = first.child(2);

    assert!(root.is_root());
    assert_eq!(first.indices(), &[0]);
    assert_eq!(nested.indices(), &[0, 2]);
    assert_eq!(nested.to_string(), "root/0/2");
}

#[test]
fn deep_paths_spill_past_inline_capacity() {
    let mut path = TreePath::root();
    for i in 0..12 {
        path = path.child(i);
    }
    assert_eq!(path.depth(), 12);
    assert_eq!(path.indices().last(), Some(&11));
}

#[test]
fn push_and_pop_move_one_cursor() {
    let mut path = TreePath::root();
    path.push(1);
    path.push(4);
    assert_eq!(path, TreePath::root().child(1).child(4));

    assert_eq!(path.pop(), Some(4));
    path.push(5);
    assert_eq!(path.to_string(), "root/1/5");

    path.pop();
    path.pop();
    assert!(path.is_root());
    assert_eq!(path.pop(), None);
}
