use std::fmt;

use derivative::Derivative;
use shade_lang_miette_util::codespan::Span;

use crate::{ScopeId, Type};

/// Index of a node in the arena of a [`crate::Tree`].
///
/// Like source positions, indices are 32 bits wide; a tree holds at most
/// `u32::MAX` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the program tree.
///
/// The `parent` link is a non-owning back-reference which is only used for
/// upward traversal. Ownership is expressed by the child lists in `kind`.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    #[derivative(PartialEq = "ignore")]
    pub parent: Option<NodeId>,
    pub scope: ScopeId,
    /// The type assigned by the type checker, if any.
    pub typ: Option<Type>,
    #[derivative(PartialEq = "ignore")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program(Program),
    Block(Block),
    VarDecl(VarDecl),
    Assign(Assign),
    ExprStmt(ExprStmt),
    If(If),
    Return(Return),
    Switch(Switch),
    Case(Case),
    Visitor(Visitor),
    Arm(Arm),
    Component(Component),
    Function(Function),
    Ident(Ident),
    Literal(Literal),
    Factor(Factor),
    Selector(Selector),
    Index(Index),
    Call(Call),
    Paren(Paren),
    Binary(Binary),
}

impl NodeKind {
    /// A human-readable name of the node category, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program(_) => "program",
            NodeKind::Block(_) => "block",
            NodeKind::VarDecl(_) => "variable declaration",
            NodeKind::Assign(_) => "assignment",
            NodeKind::ExprStmt(_) => "expression statement",
            NodeKind::If(_) => "if statement",
            NodeKind::Return(_) => "return statement",
            NodeKind::Switch(_) => "switch statement",
            NodeKind::Case(_) => "switch case",
            NodeKind::Visitor(_) => "visitor",
            NodeKind::Arm(_) => "visitor arm",
            NodeKind::Component(_) => "component",
            NodeKind::Function(_) => "function",
            NodeKind::Ident(_) => "identifier",
            NodeKind::Literal(_) => "literal",
            NodeKind::Factor(_) => "factor",
            NodeKind::Selector(_) => "selector",
            NodeKind::Index(_) => "index",
            NodeKind::Call(_) => "call",
            NodeKind::Paren(_) => "parenthesized expression",
            NodeKind::Binary(_) => "binary expression",
        }
    }
}

// Statements
//
//

/// The root of a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub stmts: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub stmts: Vec<NodeId>,
}

/// `name: typ = init;` or `name := init;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    /// The declared [`Ident`].
    pub name: NodeId,
    /// The written type annotation, an [`Ident`] naming the type.
    pub typ: Option<NodeId>,
    pub init: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    pub lhs: NodeId,
    pub rhs: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprStmt {
    pub expr: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub cond: NodeId,
    pub then_branch: NodeId,
    pub else_branch: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub value: Option<NodeId>,
}

/// `switch (scrutinee) { case L: ... default: ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    pub scrutinee: NodeId,
    /// [`Case`] nodes in source order.
    pub cases: Vec<NodeId>,
    /// The [`Block`] of the default case.
    pub default: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub label: NodeId,
    /// A [`Block`].
    pub body: NodeId,
}

// Visitors
//
//

/// The pattern-dispatch construct `visitor { before n: T -> { ... } ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Visitor {
    /// [`Arm`] nodes in source order, each with a component.
    pub arms: Vec<NodeId>,
    /// The wildcard [`Arm`] `before _ -> { ... }`, which has no component.
    pub wildcard: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmPhase {
    Before,
    After,
}

impl fmt::Display for ArmPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmPhase::Before => f.write_str("before"),
            ArmPhase::After => f.write_str("after"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm {
    pub phase: ArmPhase,
    /// The binder of the arm, `None` for the wildcard arm.
    pub component: Option<NodeId>,
    /// A [`Block`].
    pub body: NodeId,
}

/// A typed binder `name: typ`, used by visitor arms and function parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// The bound [`Ident`].
    pub name: NodeId,
    /// An [`Ident`] naming the declared type.
    pub typ: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// [`Component`] nodes.
    pub params: Vec<NodeId>,
    pub body: NodeId,
}

// Expressions
//
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Str(String),
    Bool(bool),
}

/// A field-access chain: an operand followed by [`Selector`] and [`Index`] steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    pub operand: NodeId,
    pub ops: Vec<NodeId>,
}

/// The step `.field` of a [`Factor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// An [`Ident`].
    pub field: NodeId,
}

/// The step `[index]` of a [`Factor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub index: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// An [`Ident`] naming the callee.
    pub callee: NodeId,
    pub args: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren {
    pub inner: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Eq,
    Neq,
    Lt,
    And,
    Or,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Eq => "==",
            BinOp::Neq => "!=",
            BinOp::Lt => "<",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub op: BinOp,
    pub lhs: NodeId,
    pub rhs: NodeId,
}
