use crate::js::{self, Expr, Item, Module};
use crate::schema::ProjectDescriptor;

use super::CHAINCODE_PATH;

/// Build the entry module: import the contract, re-export it under
/// `<name>Contract`, and export the `contracts` list the runtime registers.
pub fn entry_module(project: &ProjectDescriptor) -> Module {
    let class_name = project.class_name();
    Module {
        items: vec![
            Item::Directive("use strict".to_string()),
            Item::Import {
                default: Some(class_name.clone()),
                named: Vec::new(),
                from: format!("./{CHAINCODE_PATH}"),
            },
            Item::ExportConst {
                name: project.export_name(),
                value: Expr::raw(class_name.clone()),
            },
            Item::ExportConst {
                name: "contracts".to_string(),
                value: Expr::raw(format!("[{class_name}]")),
            },
        ],
    }
}

pub fn entry_source(project: &ProjectDescriptor) -> String {
    js::emit_module(&entry_module(project))
}
