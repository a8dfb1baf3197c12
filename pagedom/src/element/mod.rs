mod node;

pub use node::{Element, ElementKind, InputKind};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Find the closest ancestor of `id` (not the element itself) matching `pred`.
pub fn find_ancestor<'a>(
    root: &'a Element,
    id: &str,
    pred: impl Fn(&Element) -> bool + Copy,
) -> Option<&'a Element> {
    fn search<'a>(
        node: &'a Element,
        id: &str,
        pred: impl Fn(&Element) -> bool + Copy,
        nearest: Option<&'a Element>,
    ) -> Option<Option<&'a Element>> {
        if node.id == id {
            return Some(nearest);
        }
        let nearest = if pred(node) { Some(node) } else { nearest };
        node.children
            .iter()
            .find_map(|child| search(child, id, pred, nearest))
    }

    search(root, id, pred, None).flatten()
}

/// Visit every element in document order.
pub fn walk<'a>(root: &'a Element, f: &mut impl FnMut(&'a Element)) {
    f(root);
    for child in &root.children {
        walk(child, f);
    }
}
