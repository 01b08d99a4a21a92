//! Chaincode assembler.
//!
//! Joins the rendered operations behind a fixed `initLedger` prologue in a
//! single contract class and wraps it in an ES module with a default export.

use crate::config::GeneratorConfig;
use crate::js::{self, ClassTemplate, Expr, Item, LogLevel, MethodTemplate, Module, Stmt};
use crate::schema::ProjectDescriptor;
use crate::template::render;

/// Base class every generated contract extends.
pub const CONTRACT_BASE: &str = "Contract";
/// Package providing [`CONTRACT_BASE`].
pub const CONTRACT_PACKAGE: &str = "fabric-contract-api";

/// Derive the contract class name: `name` with its first character upper-cased.
///
/// Every artifact that mentions the class goes through this function.
pub fn class_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn init_ledger(project_name: &str) -> MethodTemplate {
    MethodTemplate {
        name: "initLedger".to_string(),
        params: Vec::new(),
        body: vec![Stmt::Log {
            level: LogLevel::Info,
            args: vec![Expr::str(format!("{project_name} chaincode initialized"))],
        }],
    }
}

/// Build the contract class: `initLedger`, then one method per operation in
/// declaration order.
pub fn assemble_class(project: &ProjectDescriptor, config: &GeneratorConfig) -> ClassTemplate {
    let mut methods = Vec::with_capacity(project.operations.len() + 1);
    methods.push(init_ledger(&project.name));
    methods.extend(
        project
            .operations
            .iter()
            .map(|op| render(op, &config.composite_index)),
    );
    ClassTemplate {
        name: project.class_name(),
        extends: CONTRACT_BASE.to_string(),
        methods,
    }
}

/// Build the whole `lib/chaincode.js` module.
pub fn assemble_module(project: &ProjectDescriptor, config: &GeneratorConfig) -> Module {
    let class = assemble_class(project, config);
    let class_name = class.name.clone();
    Module {
        items: vec![
            Item::Directive("use strict".to_string()),
            Item::Import {
                default: None,
                named: vec![CONTRACT_BASE.to_string()],
                from: CONTRACT_PACKAGE.to_string(),
            },
            Item::Class(class),
            Item::ExportDefault(class_name),
        ],
    }
}

/// Assemble the contract source. Identical input gives identical bytes.
pub fn assemble(project: &ProjectDescriptor, config: &GeneratorConfig) -> String {
    let source = js::emit_module(&assemble_module(project, config));
    tracing::debug!(
        project = %project.name,
        operations = project.operations.len(),
        bytes = source.len(),
        "assembled chaincode"
    );
    source
}
