//! Constructors for program tree nodes.
//!
//! Every constructor links the new node as the parent of the children it is
//! given and records the scope the node lives in. Types and spans are
//! attached afterwards with [`Tree::with_typ`] and [`Tree::with_span`].

use shade_lang_miette_util::codespan::Span;

use crate::*;

impl Tree {
    /// Allocate a node and make it the parent of all its children.
    pub fn alloc(&mut self, kind: NodeKind, scope: ScopeId) -> NodeId {
        let children = kind.children();
        let id = self.push_node(Node { kind, parent: None, scope, typ: None, span: None });
        for child in children {
            self.set_parent(child, id);
        }
        id
    }

    pub fn with_typ(&mut self, id: NodeId, typ: Type) -> NodeId {
        self.set_typ(id, typ);
        id
    }

    pub fn with_span(&mut self, id: NodeId, span: Span) -> NodeId {
        self.node_mut(id).span = Some(span);
        id
    }

    /// Append `stmt` to a program or block.
    ///
    /// Returns `false` and leaves the tree unchanged if `block` is neither.
    pub fn push_stmt(&mut self, block: NodeId, stmt: NodeId) -> bool {
        match self.stmts_mut(block) {
            Some(stmts) => {
                stmts.push(stmt);
                self.set_parent(stmt, block);
                true
            }
            None => false,
        }
    }

    /// Deep-copy the subtree rooted at `id`.
    ///
    /// The copy has fresh node ids and correct parent links; the copied
    /// root has no parent. Scopes are shared with the original.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let Node { kind, scope, typ, span, .. } = self.node(id).clone();
        let kind = kind.map_children(&mut |child| self.clone_subtree(child));
        let copy = self.alloc(kind, scope);
        let node = self.node_mut(copy);
        node.typ = typ;
        node.span = span;
        copy
    }

    // Expressions
    //
    //

    pub fn ident(&mut self, token: impl Into<String>, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Ident(Ident { token: token.into() }), scope)
    }

    pub fn literal(&mut self, literal: Literal, scope: ScopeId) -> NodeId {
        let typ = match &literal {
            Literal::Int(_) => Type::Int,
            Literal::Str(_) => Type::String,
            Literal::Bool(_) => Type::Bool,
        };
        let id = self.alloc(NodeKind::Literal(literal), scope);
        self.with_typ(id, typ)
    }

    /// The step `.field`.
    pub fn selector(&mut self, field: impl Into<String>, scope: ScopeId) -> NodeId {
        let field = self.ident(field, scope);
        self.alloc(NodeKind::Selector(Selector { field }), scope)
    }

    /// The step `[index]`.
    pub fn index(&mut self, index: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Index(Index { index }), scope)
    }

    pub fn factor(&mut self, operand: NodeId, ops: Vec<NodeId>, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Factor(Factor { operand, ops }), scope)
    }

    pub fn paren(&mut self, inner: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Paren(Paren { inner }), scope)
    }

    pub fn call(&mut self, callee: impl Into<String>, args: Vec<NodeId>, scope: ScopeId) -> NodeId {
        let callee = self.ident(callee, scope);
        self.alloc(NodeKind::Call(Call { callee, args }), scope)
    }

    pub fn binary(&mut self, op: BinOp, lhs: NodeId, rhs: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Binary(Binary { op, lhs, rhs }), scope)
    }

    // Statements
    //
    //

    pub fn block(&mut self, stmts: Vec<NodeId>, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Block(Block { stmts }), scope)
    }

    /// `name: typ = init;`, where `typ` is the written type name.
    pub fn var_decl(
        &mut self,
        name: impl Into<String>,
        typ: Option<&str>,
        init: Option<NodeId>,
        scope: ScopeId,
    ) -> NodeId {
        let name = self.ident(name, scope);
        let typ = typ.map(|typ| self.ident(typ, scope));
        self.alloc(NodeKind::VarDecl(VarDecl { name, typ, init }), scope)
    }

    pub fn assign(&mut self, lhs: NodeId, rhs: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Assign(Assign { lhs, rhs }), scope)
    }

    pub fn expr_stmt(&mut self, expr: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::ExprStmt(ExprStmt { expr }), scope)
    }

    pub fn if_(
        &mut self,
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
        scope: ScopeId,
    ) -> NodeId {
        self.alloc(NodeKind::If(If { cond, then_branch, else_branch }), scope)
    }

    pub fn return_(&mut self, value: Option<NodeId>, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Return(Return { value }), scope)
    }

    pub fn switch(
        &mut self,
        scrutinee: NodeId,
        cases: Vec<NodeId>,
        default: Option<NodeId>,
        scope: ScopeId,
    ) -> NodeId {
        self.alloc(NodeKind::Switch(Switch { scrutinee, cases, default }), scope)
    }

    pub fn case(&mut self, label: NodeId, body: NodeId, scope: ScopeId) -> NodeId {
        self.alloc(NodeKind::Case(Case { label, body }), scope)
    }

    // Visitors and binders
    //
    //

    /// The binder `name: typ`, where `typ` is the written type name.
    pub fn component(
        &mut self,
        name: impl Into<String>,
        typ: impl Into<String>,
        scope: ScopeId,
    ) -> NodeId {
        let name = self.ident(name, scope);
        let typ = self.ident(typ, scope);
        self.alloc(NodeKind::Component(Component { name, typ }), scope)
    }

    pub fn arm(
        &mut self,
        phase: ArmPhase,
        component: Option<NodeId>,
        body: NodeId,
        scope: ScopeId,
    ) -> NodeId {
        self.alloc(NodeKind::Arm(Arm { phase, component, body }), scope)
    }

    pub fn visitor(
        &mut self,
        arms: Vec<NodeId>,
        wildcard: Option<NodeId>,
        scope: ScopeId,
    ) -> NodeId {
        let id = self.alloc(NodeKind::Visitor(Visitor { arms, wildcard }), scope);
        self.with_typ(id, Type::Visitor)
    }

    pub fn function(&mut self, params: Vec<NodeId>, body: NodeId, scope: ScopeId) -> NodeId {
        let id = self.alloc(NodeKind::Function(Function { params, body }), scope);
        self.with_typ(id, Type::Function)
    }
}
