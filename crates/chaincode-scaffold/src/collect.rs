//! Interactive operation collector.
//!
//! Asks for a method name, then a kind from a numbered menu, then whether
//! to add another, until the operator declines. Reads from any [`BufRead`]
//! and prompts on any [`Write`], so a scripted input drives it in tests.

use std::io::{BufRead, Write};

use crate::error::ScaffoldError;
use crate::schema::{OperationDescriptor, OperationKind};

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ScaffoldError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), ScaffoldError> {
    write!(output, "{text}")?;
    output.flush()?;
    Ok(())
}

fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, ScaffoldError> {
    loop {
        prompt(output, "Enter the name of the function: ")?;
        let Some(name) = read_line(input)? else {
            return Err(ScaffoldError::InputClosed("an operation name"));
        };
        if name.is_empty() {
            writeln!(output, "Function name cannot be empty.")?;
            continue;
        }
        return Ok(name);
    }
}

/// Accept a menu number or an exact kind tag. Unknown tags are refused
/// here so a typo is not silently turned into a custom stub.
fn parse_choice(answer: &str) -> Option<OperationKind> {
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| OperationKind::ALL.get(i))
            .copied();
    }
    let kind = OperationKind::from_tag(answer);
    if kind != OperationKind::Custom || answer.eq_ignore_ascii_case("custom") {
        Some(kind)
    } else {
        None
    }
}

fn ask_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<OperationKind, ScaffoldError> {
    writeln!(output, "Select the type of function:")?;
    for (i, kind) in OperationKind::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", i + 1, kind.description())?;
    }
    let last = OperationKind::ALL.len();
    loop {
        prompt(output, &format!("Choice [1-{last}]: "))?;
        let Some(answer) = read_line(input)? else {
            return Err(ScaffoldError::InputClosed("an operation kind"));
        };
        match parse_choice(&answer) {
            Some(kind) => return Ok(kind),
            None => writeln!(output, "Please choose a number between 1 and {last}.")?,
        }
    }
}

/// Defaults to no; end of input also means no.
fn ask_more<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool, ScaffoldError> {
    prompt(output, "Do you want to add another function? [y/N]: ")?;
    let answer = read_line(input)?.unwrap_or_default().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Collect operations interactively. At least one operation is collected.
///
/// # Errors
///
/// Returns [`ScaffoldError::InputClosed`] if input ends at a name or kind
/// prompt, or [`ScaffoldError::Io`] on read/write failure.
pub fn collect_operations<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Vec<OperationDescriptor>, ScaffoldError> {
    let mut operations = Vec::new();
    loop {
        let name = ask_name(input, output)?;
        let kind = ask_kind(input, output)?;
        tracing::debug!(%name, %kind, "collected operation");
        operations.push(OperationDescriptor::new(name, kind));
        if !ask_more(input, output)? {
            return Ok(operations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<Vec<OperationDescriptor>, ScaffoldError>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = collect_operations(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn collects_single_operation() {
        let (ops, _) = run("getAsset\n1\nn\n");
        assert_eq!(
            ops.unwrap(),
            [OperationDescriptor::new("getAsset", OperationKind::Query)]
        );
    }

    #[test]
    fn collects_in_declaration_order() {
        let (ops, _) = run("getAsset\n1\ny\ncreateAsset\n2\nyes\ntrail\n6\n\n");
        let ops = ops.unwrap();
        let names: Vec<&str> = ops.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["getAsset", "createAsset", "trail"]);
        assert_eq!(ops[2].kind, OperationKind::History);
    }

    #[test]
    fn accepts_kind_tags() {
        let (ops, _) = run("scan\nqueryAllTX\nn\n");
        assert_eq!(ops.unwrap()[0].kind, OperationKind::QueryAllTransactions);
        let (ops, _) = run("stub\ncustom\nn\n");
        assert_eq!(ops.unwrap()[0].kind, OperationKind::Custom);
    }

    #[test]
    fn reprompts_on_empty_name() {
        let (ops, out) = run("\n  \ngetAsset\n1\nn\n");
        assert_eq!(ops.unwrap()[0].name, "getAsset");
        assert_eq!(out.matches("Function name cannot be empty.").count(), 2);
    }

    #[test]
    fn reprompts_on_bad_choice() {
        let (ops, out) = run("getAsset\n0\n8\nbogus\n3\nn\n");
        assert_eq!(ops.unwrap()[0].kind, OperationKind::CreateComposite);
        assert_eq!(out.matches("Please choose a number between 1 and 7.").count(), 3);
    }

    #[test]
    fn menu_lists_all_kinds() {
        let (_, out) = run("x\n7\nn\n");
        for kind in OperationKind::ALL {
            assert!(out.contains(kind.description()));
        }
        assert!(out.contains("  7) Custom (Define your own function)"));
    }

    #[test]
    fn end_of_input_at_confirmation_finishes() {
        let (ops, _) = run("getAsset\n1\n");
        assert_eq!(ops.unwrap().len(), 1);
    }

    #[test]
    fn end_of_input_at_name_is_error() {
        let (ops, _) = run("");
        assert!(matches!(ops, Err(ScaffoldError::InputClosed("an operation name"))));
        let (ops, _) = run("a\n1\ny\n");
        assert!(matches!(ops, Err(ScaffoldError::InputClosed("an operation name"))));
    }

    #[test]
    fn end_of_input_at_kind_is_error() {
        let (ops, _) = run("getAsset\n");
        assert!(matches!(ops, Err(ScaffoldError::InputClosed("an operation kind"))));
    }

    #[test]
    fn parse_choice_bounds() {
        assert_eq!(parse_choice("1"), Some(OperationKind::Query));
        assert_eq!(parse_choice("7"), Some(OperationKind::Custom));
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("8"), None);
        assert_eq!(parse_choice("create"), Some(OperationKind::Create));
        assert_eq!(parse_choice("creat"), None);
    }
}
