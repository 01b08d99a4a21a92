//! Minimal JavaScript syntax tree for generated chaincode.
//!
//! Templates build values of these types instead of strings, so tests can
//! ask which ledger capabilities a method calls and in what order. The
//! [`emit`] module is the only place that turns them into source text.
//! Names and string literals are emitted verbatim, never escaped.

mod emit;

pub use emit::{emit_class, emit_method, emit_module};

/// The ledger capabilities generated code may call through `ctx.stub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerCall {
    GetState,
    PutState,
    CreateCompositeKey,
    GetStateByRange,
    GetHistoryForKey,
}

impl LedgerCall {
    pub const ALL: [Self; 5] = [
        Self::GetState,
        Self::PutState,
        Self::CreateCompositeKey,
        Self::GetStateByRange,
        Self::GetHistoryForKey,
    ];

    /// Method name on the runtime's stub object.
    pub fn method_name(self) -> &'static str {
        match self {
            Self::GetState => "getState",
            Self::PutState => "putState",
            Self::CreateCompositeKey => "createCompositeKey",
            Self::GetStateByRange => "getStateByRange",
            Self::GetHistoryForKey => "getHistoryForKey",
        }
    }
}

impl std::fmt::Display for LedgerCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Verbatim expression text.
    Raw(String),
    /// Single-quoted string literal.
    Str(String),
    /// `ctx.stub.<call>(<args>)`
    Ledger { call: LedgerCall, args: Vec<Expr> },
    /// `await <expr>`
    Await(Box<Expr>),
}

impl Expr {
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// `await ctx.stub.<call>(<args>)`
    pub fn await_ledger(call: LedgerCall, args: Vec<Expr>) -> Self {
        Self::Await(Box::new(Self::Ledger { call, args }))
    }

    fn collect_ledger_calls(&self, out: &mut Vec<LedgerCall>) {
        match self {
            Self::Raw(_) | Self::Str(_) => {}
            Self::Ledger { call, args } => {
                for arg in args {
                    arg.collect_ledger_calls(out);
                }
                out.push(*call);
            }
            Self::Await(inner) => inner.collect_ledger_calls(out),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Const,
    Let,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `const name = value;` or `let name;`
    Declare {
        binding: Binding,
        name: String,
        value: Option<Expr>,
    },
    /// `target = value;`
    Assign { target: String, value: Expr },
    /// `<expr>;`
    Expr(Expr),
    /// `console.<level>(<args>);`
    Log { level: LogLevel, args: Vec<Expr> },
    Return(Expr),
    /// `throw new Error(<message>);`
    Throw(Expr),
    If { cond: Expr, then: Vec<Stmt> },
    TryCatch {
        body: Vec<Stmt>,
        error: String,
        handler: Vec<Stmt>,
    },
    /// `for await (const <pattern> of <iterable>) { ... }`
    ForAwait {
        pattern: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn constant(name: impl Into<String>, value: Expr) -> Self {
        Self::Declare {
            binding: Binding::Const,
            name: name.into(),
            value: Some(value),
        }
    }

    fn collect_ledger_calls(&self, out: &mut Vec<LedgerCall>) {
        match self {
            Self::Declare { value, .. } => {
                if let Some(value) = value {
                    value.collect_ledger_calls(out);
                }
            }
            Self::Assign { value, .. } => value.collect_ledger_calls(out),
            Self::Expr(e) | Self::Return(e) | Self::Throw(e) => e.collect_ledger_calls(out),
            Self::Log { args, .. } => {
                for arg in args {
                    arg.collect_ledger_calls(out);
                }
            }
            Self::If { cond, then } => {
                cond.collect_ledger_calls(out);
                collect_block(then, out);
            }
            Self::TryCatch { body, handler, .. } => {
                collect_block(body, out);
                collect_block(handler, out);
            }
            Self::ForAwait { iterable, body, .. } => {
                iterable.collect_ledger_calls(out);
                collect_block(body, out);
            }
        }
    }
}

fn collect_block(stmts: &[Stmt], out: &mut Vec<LedgerCall>) {
    for stmt in stmts {
        stmt.collect_ledger_calls(out);
    }
}

/// An `async` class method taking `ctx` followed by `params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodTemplate {
    pub name: String,
    /// Parameters after `ctx`; a rest parameter is written as `...args`.
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

impl MethodTemplate {
    /// Ledger capabilities the body calls, in evaluation order.
    pub fn ledger_calls(&self) -> Vec<LedgerCall> {
        let mut out = Vec::new();
        collect_block(&self.body, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTemplate {
    pub name: String,
    pub extends: String,
    pub methods: Vec<MethodTemplate>,
}

/// A top-level module item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// `'use strict';`
    Directive(String),
    /// `import <default> from '<from>';` or `import { a, b } from '<from>';`
    Import {
        default: Option<String>,
        named: Vec<String>,
        from: String,
    },
    Class(ClassTemplate),
    /// `export const <name> = <value>;`
    ExportConst { name: String, value: Expr },
    /// `export default <name>;`
    ExportDefault(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    pub items: Vec<Item>,
}
