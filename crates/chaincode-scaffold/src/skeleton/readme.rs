use crate::schema::ProjectDescriptor;

/// Render the README: a title and one `- <name>: <Kind>` line per
/// operation, in declaration order.
pub fn readme(project: &ProjectDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} Chaincode\n\n", project.name));
    out.push_str("This chaincode includes the following functions:\n\n");
    for op in &project.operations {
        out.push_str(&format!("- {}: {}\n", op.name, op.kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{OperationDescriptor, OperationKind};

    fn listing(doc: &str) -> Vec<&str> {
        doc.lines().filter(|l| l.starts_with("- ")).collect()
    }

    #[test]
    fn lists_operations_in_order() {
        let project = ProjectDescriptor::new(
            "assettracker",
            vec![
                OperationDescriptor::new("getAsset", OperationKind::Query),
                OperationDescriptor::new("createAsset", OperationKind::Create),
            ],
        );
        let doc = readme(&project);
        assert!(doc.starts_with("# assettracker Chaincode\n"));
        assert_eq!(listing(&doc), ["- getAsset: Query", "- createAsset: Create"]);
    }

    #[test]
    fn empty_listing_still_produces_document() {
        let doc = readme(&ProjectDescriptor::new("empty", Vec::new()));
        assert_eq!(
            doc,
            "# empty Chaincode\n\nThis chaincode includes the following functions:\n\n"
        );
        assert!(listing(&doc).is_empty());
    }

    #[test]
    fn unknown_kinds_are_listed_as_custom() {
        let project = ProjectDescriptor::new(
            "p",
            vec![OperationDescriptor::new("swap", OperationKind::from_tag("swapTokens"))],
        );
        assert_eq!(listing(&readme(&project)), ["- swap: Custom"]);
    }
}
