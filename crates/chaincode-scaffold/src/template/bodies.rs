//! Kind-specific method bodies.

use crate::js::{Binding, Expr, LedgerCall, LogLevel, Stmt};

const RECORDING_BANNER: &str = "======================= Recording New Data";
const INVALID_JSON: &str =
    "Invalid JSON input. Ensure the input arguments are properly formatted.";
const SUCCESS_ACK: &str =
    "JSON.stringify({ Status: 'Success', Message: 'Recording of Data is Successful', Key: key })";

pub(super) fn query_body() -> Vec<Stmt> {
    vec![
        Stmt::constant(
            "value",
            Expr::await_ledger(LedgerCall::GetState, vec![Expr::raw("key")]),
        ),
        Stmt::If {
            cond: Expr::raw("!value || value.length === 0"),
            then: vec![Stmt::Throw(Expr::raw("`Key ${key} does not exist`"))],
        },
        Stmt::Return(Expr::raw("value.toString()")),
    ]
}

/// Banner log plus `JSON.parse(args)` guarded so malformed input throws
/// before anything touches the ledger.
fn parse_input() -> Vec<Stmt> {
    vec![
        Stmt::Log {
            level: LogLevel::Info,
            args: vec![Expr::str(RECORDING_BANNER)],
        },
        Stmt::Declare {
            binding: Binding::Let,
            name: "inputArgs".to_string(),
            value: None,
        },
        Stmt::TryCatch {
            body: vec![Stmt::Assign {
                target: "inputArgs".to_string(),
                value: Expr::raw("JSON.parse(args)"),
            }],
            error: "err".to_string(),
            handler: vec![Stmt::Throw(Expr::str(INVALID_JSON))],
        },
    ]
}

fn put_envelope() -> Stmt {
    Stmt::Expr(Expr::await_ledger(
        LedgerCall::PutState,
        vec![
            Expr::raw("key"),
            Expr::raw("Buffer.from(JSON.stringify({ Object: inputArgs }))"),
        ],
    ))
}

fn composite_key(index: &str, part: &str) -> Expr {
    Expr::await_ledger(
        LedgerCall::CreateCompositeKey,
        vec![Expr::str(index), Expr::raw(format!("[{part}]"))],
    )
}

pub(super) fn create_body() -> Vec<Stmt> {
    let mut body = parse_input();
    body.push(Stmt::constant("key", Expr::raw("inputArgs.key")));
    body.push(put_envelope());
    body.push(Stmt::Return(Expr::raw(SUCCESS_ACK)));
    body
}

pub(super) fn create_composite_body(index: &str) -> Vec<Stmt> {
    let mut body = parse_input();
    body.push(Stmt::constant("key", composite_key(index, "inputArgs.key")));
    body.push(put_envelope());
    body.push(Stmt::Return(Expr::raw(SUCCESS_ACK)));
    body
}

/// No not-found guard: an absent key returns an empty string.
pub(super) fn query_composite_body(index: &str) -> Vec<Stmt> {
    vec![
        Stmt::constant("key", Expr::raw("JSON.parse(args).key")),
        Stmt::constant("compositeKey", composite_key(index, "key")),
        Stmt::constant(
            "value",
            Expr::await_ledger(LedgerCall::GetState, vec![Expr::raw("compositeKey")]),
        ),
        Stmt::Return(Expr::raw("value.toString()")),
    ]
}

/// Falls back to the raw value whenever the decoded record is falsy.
pub(super) fn query_all_body() -> Vec<Stmt> {
    vec![
        Stmt::constant("allResults", Expr::raw("[]")),
        Stmt::ForAwait {
            pattern: "{ key, value }".to_string(),
            iterable: Expr::Ledger {
                call: LedgerCall::GetStateByRange,
                args: vec![Expr::str(""), Expr::str("")],
            },
            body: vec![
                Stmt::constant(
                    "record",
                    Expr::raw("JSON.parse(Buffer.from(value).toString('utf8')) || value"),
                ),
                Stmt::Expr(Expr::raw("allResults.push({ Key: key, Record: record })")),
            ],
        },
        Stmt::Return(Expr::raw("JSON.stringify(allResults)")),
    ]
}

pub(super) fn history_body() -> Vec<Stmt> {
    vec![
        Stmt::constant("history", Expr::raw("[]")),
        Stmt::ForAwait {
            pattern: "res".to_string(),
            iterable: Expr::Ledger {
                call: LedgerCall::GetHistoryForKey,
                args: vec![Expr::raw("key")],
            },
            body: vec![Stmt::Expr(Expr::raw(
                "history.push({ txId: res.txId, value: res.value.toString(), isDelete: res.isDelete })",
            ))],
        },
        Stmt::Return(Expr::raw("JSON.stringify({ key: key, values: history })")),
    ]
}

pub(super) fn custom_body(name: &str) -> Vec<Stmt> {
    vec![Stmt::Log {
        level: LogLevel::Log,
        args: vec![
            Expr::str(format!("{name} called with args:")),
            Expr::raw("args"),
        ],
    }]
}
