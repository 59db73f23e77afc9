use shade_lang_miette_util::codespan::Span;
use url::Url;

use crate::*;

/// A program tree stored in an arena.
///
/// Nodes are never freed: a node which is removed from its parent's child
/// list stays in the arena but is no longer reachable from [`Tree::root`].
#[derive(Debug, Clone)]
pub struct Tree {
    /// The compilation unit this tree was parsed from.
    pub uri: Url,
    /// The scope/type environment the nodes' scopes point into.
    pub env: Env,
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// An empty program.
    pub fn new(uri: Url) -> Tree {
        let env = Env::new();
        let root = Node {
            kind: NodeKind::Program(Program::default()),
            parent: None,
            scope: env.global(),
            typ: None,
            span: None,
        };
        Tree { uri, env, nodes: vec![root], root: NodeId(0) }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, including detached ones.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program().stmts.is_empty()
    }

    pub fn program(&self) -> &Program {
        match &self.node(self.root).kind {
            NodeKind::Program(program) => program,
            _ => unreachable!("The root of a tree is always a program"),
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    pub fn kind_mut(&mut self, id: NodeId) -> &mut NodeKind {
        &mut self.node_mut(id).kind
    }

    pub fn typ(&self, id: NodeId) -> Option<&Type> {
        self.node(id).typ.as_ref()
    }

    pub fn set_typ(&mut self, id: NodeId, typ: Type) {
        self.node_mut(id).typ = Some(typ);
    }

    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.node(id).span
    }

    pub fn scope(&self, id: NodeId) -> ScopeId {
        self.node(id).scope
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.node_mut(child).parent = Some(parent);
    }

    /// All proper ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |id| self.parent(*id))
    }

    /// The token of an identifier node.
    pub fn token(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Ident(Ident { token }) => Some(token),
            _ => None,
        }
    }

    /// Replace the token of an identifier node. Returns `false` if `id` is not an identifier.
    pub fn set_token(&mut self, id: NodeId, new_token: impl Into<String>) -> bool {
        match self.kind_mut(id) {
            NodeKind::Ident(Ident { token }) => {
                *token = new_token.into();
                true
            }
            _ => false,
        }
    }

    /// The statement list of a program or block.
    pub fn stmts(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.kind(id) {
            NodeKind::Program(Program { stmts }) | NodeKind::Block(Block { stmts }) => Some(stmts),
            _ => None,
        }
    }

    pub fn stmts_mut(&mut self, id: NodeId) -> Option<&mut Vec<NodeId>> {
        match self.kind_mut(id) {
            NodeKind::Program(Program { stmts }) | NodeKind::Block(Block { stmts }) => Some(stmts),
            _ => None,
        }
    }

    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("more than u32::MAX nodes"));
        self.nodes.push(node);
        id
    }
}

macro_rules! accessors {
    ($($variant:ident => $get:ident, $get_mut:ident;)*) => {
        impl Tree {
            $(
                pub fn $get(&self, id: NodeId) -> Option<&$variant> {
                    match self.kind(id) {
                        NodeKind::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                pub fn $get_mut(&mut self, id: NodeId) -> Option<&mut $variant> {
                    match self.kind_mut(id) {
                        NodeKind::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )*
        }
    };
}

accessors! {
    VarDecl => as_var_decl, as_var_decl_mut;
    Switch => as_switch, as_switch_mut;
    Case => as_case, as_case_mut;
    Visitor => as_visitor, as_visitor_mut;
    Arm => as_arm, as_arm_mut;
    Component => as_component, as_component_mut;
    Factor => as_factor, as_factor_mut;
    Selector => as_selector, as_selector_mut;
    Paren => as_paren, as_paren_mut;
}
