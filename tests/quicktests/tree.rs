use containers::bst::BinarySearchTree;

use std::collections::HashSet;

fn in_order(tree: &BinarySearchTree<i8>) -> Vec<i8> {
    let mut values = Vec::new();
    tree.in_order(|value| values.push(*value));
    values
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort();
    in_order(&tree) == sorted
}

#[quickcheck]
fn traversals_visit_everything(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut pre = Vec::new();
    let mut post = Vec::new();
    tree.pre_order(|value| pre.push(*value));
    tree.post_order(|value| post.push(*value));
    pre.sort();
    post.sort();

    pre == in_order(&tree) && post == pre && tree.len() == xs.len()
}

#[quickcheck]
fn pre_order_starts_at_first_insert_and_post_order_ends_there(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut pre = Vec::new();
    let mut post = Vec::new();
    tree.pre_order(|value| pre.push(*value));
    tree.post_order(|value| post.push(*value));

    pre.first() == xs.first() && post.last() == xs.first()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();

    let mut still_present = xs;
    for delete in &deletes {
        let len = tree.len();
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                assert!(tree.remove(delete));
                assert_eq!(tree.len(), len - 1);
            }
            None => {
                assert!(!tree.remove(delete));
                assert_eq!(tree.len(), len);
            }
        }
    }

    still_present.sort();
    in_order(&tree) == still_present && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn remove_all_copies(xs: Vec<i8>) -> bool {
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    for x in &xs {
        while tree.remove(x) {}
    }

    tree.is_empty() && xs.iter().all(|x| !tree.contains(x))
}
