use super::{Binding, ClassTemplate, Expr, Item, LogLevel, MethodTemplate, Module, Stmt};

const INDENT: &str = "    ";

fn pad(level: usize) -> String {
    INDENT.repeat(level)
}

fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::Raw(s) => s.clone(),
        Expr::Str(s) => format!("'{s}'"),
        Expr::Ledger { call, args } => {
            format!("ctx.stub.{call}({})", emit_args(args))
        }
        Expr::Await(inner) => format!("await {}", emit_expr(inner)),
    }
}

fn emit_args(args: &[Expr]) -> String {
    args.iter().map(emit_expr).collect::<Vec<_>>().join(", ")
}

fn emit_block(out: &mut String, stmts: &[Stmt], level: usize) {
    for stmt in stmts {
        emit_stmt(out, stmt, level);
    }
}

fn emit_stmt(out: &mut String, stmt: &Stmt, level: usize) {
    let p = pad(level);
    match stmt {
        Stmt::Declare {
            binding,
            name,
            value,
        } => {
            let keyword = match binding {
                Binding::Const => "const",
                Binding::Let => "let",
            };
            match value {
                Some(value) => {
                    out.push_str(&format!("{p}{keyword} {name} = {};\n", emit_expr(value)));
                }
                None => out.push_str(&format!("{p}{keyword} {name};\n")),
            }
        }
        Stmt::Assign { target, value } => {
            out.push_str(&format!("{p}{target} = {};\n", emit_expr(value)));
        }
        Stmt::Expr(e) => out.push_str(&format!("{p}{};\n", emit_expr(e))),
        Stmt::Log { level: log, args } => {
            let method = match log {
                LogLevel::Log => "log",
                LogLevel::Info => "info",
            };
            out.push_str(&format!("{p}console.{method}({});\n", emit_args(args)));
        }
        Stmt::Return(e) => out.push_str(&format!("{p}return {};\n", emit_expr(e))),
        Stmt::Throw(e) => out.push_str(&format!("{p}throw new Error({});\n", emit_expr(e))),
        Stmt::If { cond, then } => {
            out.push_str(&format!("{p}if ({}) {{\n", emit_expr(cond)));
            emit_block(out, then, level + 1);
            out.push_str(&format!("{p}}}\n"));
        }
        Stmt::TryCatch {
            body,
            error,
            handler,
        } => {
            out.push_str(&format!("{p}try {{\n"));
            emit_block(out, body, level + 1);
            out.push_str(&format!("{p}}} catch ({error}) {{\n"));
            emit_block(out, handler, level + 1);
            out.push_str(&format!("{p}}}\n"));
        }
        Stmt::ForAwait {
            pattern,
            iterable,
            body,
        } => {
            out.push_str(&format!(
                "{p}for await (const {pattern} of {}) {{\n",
                emit_expr(iterable)
            ));
            emit_block(out, body, level + 1);
            out.push_str(&format!("{p}}}\n"));
        }
    }
}

/// Emit one method at the given indentation level.
pub fn emit_method(method: &MethodTemplate, level: usize) -> String {
    let p = pad(level);
    let mut params = vec!["ctx"];
    params.extend(method.params.iter().map(String::as_str));

    let mut out = String::new();
    out.push_str(&format!(
        "{p}async {}({}) {{\n",
        method.name,
        params.join(", ")
    ));
    emit_block(&mut out, &method.body, level + 1);
    out.push_str(&format!("{p}}}\n"));
    out
}

/// Emit a class declaration; methods are separated by one blank line.
pub fn emit_class(class: &ClassTemplate) -> String {
    let mut out = String::new();
    out.push_str(&format!("class {} extends {} {{\n", class.name, class.extends));
    for (i, method) in class.methods.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&emit_method(method, 1));
    }
    out.push_str("}\n");
    out
}

fn emit_item(item: &Item) -> String {
    match item {
        Item::Directive(d) => format!("'{d}';\n"),
        Item::Import {
            default,
            named,
            from,
        } => {
            let mut clauses = Vec::new();
            if let Some(default) = default {
                clauses.push(default.clone());
            }
            if !named.is_empty() {
                clauses.push(format!("{{ {} }}", named.join(", ")));
            }
            format!("import {} from '{from}';\n", clauses.join(", "))
        }
        Item::Class(class) => emit_class(class),
        Item::ExportConst { name, value } => {
            format!("export const {name} = {};\n", emit_expr(value))
        }
        Item::ExportDefault(name) => format!("export default {name};\n"),
    }
}

/// Runs of imports and runs of `export const` stay together; every other
/// pair of items is separated by a blank line.
fn grouped(prev: &Item, next: &Item) -> bool {
    matches!(
        (prev, next),
        (Item::Import { .. }, Item::Import { .. })
            | (Item::ExportConst { .. }, Item::ExportConst { .. })
    )
}

/// Emit a whole module.
pub fn emit_module(module: &Module) -> String {
    let mut out = String::new();
    let mut prev: Option<&Item> = None;
    for item in &module.items {
        if let Some(prev) = prev
            && !grouped(prev, item)
        {
            out.push('\n');
        }
        out.push_str(&emit_item(item));
        prev = Some(item);
    }
    out
}
