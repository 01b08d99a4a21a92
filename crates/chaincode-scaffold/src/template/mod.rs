//! Template engine.
//!
//! Maps one [`OperationDescriptor`] to one contract method. Rendering is
//! total: every kind has a template, and descriptors are never rejected.
//! An empty name or a name that collides with `initLedger` is emitted as
//! given and only fails when the generated contract is loaded.

mod bodies;

use crate::js::{self, MethodTemplate};
use crate::schema::{OperationDescriptor, OperationKind};

/// Parameters after `ctx` for each kind.
fn params(kind: OperationKind) -> Vec<String> {
    let names: &[&str] = match kind {
        OperationKind::Query | OperationKind::History => &["key"],
        OperationKind::Create | OperationKind::CreateComposite | OperationKind::QueryComposite => {
            &["args"]
        }
        OperationKind::QueryAllTransactions => &[],
        OperationKind::Custom => &["...args"],
    };
    names.iter().map(|s| (*s).to_string()).collect()
}

/// Build the method for one operation.
///
/// `composite_index` is the index name composite-key templates pass to
/// `createCompositeKey`; other kinds ignore it.
pub fn render(op: &OperationDescriptor, composite_index: &str) -> MethodTemplate {
    let body = match op.kind {
        OperationKind::Query => bodies::query_body(),
        OperationKind::Create => bodies::create_body(),
        OperationKind::CreateComposite => bodies::create_composite_body(composite_index),
        OperationKind::QueryComposite => bodies::query_composite_body(composite_index),
        OperationKind::QueryAllTransactions => bodies::query_all_body(),
        OperationKind::History => bodies::history_body(),
        OperationKind::Custom => bodies::custom_body(&op.name),
    };
    tracing::debug!(name = %op.name, kind = %op.kind, "rendered operation");
    MethodTemplate {
        name: op.name.clone(),
        params: params(op.kind),
        body,
    }
}

/// Render one operation straight to source text, indented as a class member.
pub fn render_source(op: &OperationDescriptor, composite_index: &str) -> String {
    js::emit_method(&render(op, composite_index), 1)
}
