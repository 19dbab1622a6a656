/// Index of a node inside the arena. Links between nodes are expressed as
/// these handles rather than references, so the arena stays the sole owner
/// of every node.
pub(crate) type NodeId = usize;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // one forward link per level this node participates in;
    // links.len() is exactly the node's height
    pub(crate) links: Vec<Option<NodeId>>,
}

impl<K, V> Node<K, V> {
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }
}

/// Owns every node in the map. Slots freed by a removal are recycled by the
/// next allocation, and freeing a slot drops its key and value immediately.
pub(crate) struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, key: K, value: V, height: usize) -> NodeId {
        let node = Node {
            key,
            value,
            links: vec![None; height],
        };
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    pub(crate) fn free(&mut self, id: NodeId) {
        self.slots[id] = None;
        self.free.push(id);
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node<K, V> {
        self.slots[id].as_ref().expect("stale node id")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        self.slots[id].as_mut().expect("stale node id")
    }
}
