use serde::{Deserialize, Deserializer, Serialize};

use crate::assemble::class_name;

/// The closed set of operation templates a chaincode method can be built from.
///
/// Tags are parsed leniently: any tag outside the known set becomes
/// [`OperationKind::Custom`], so parsing a kind never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperationKind {
    Query,
    Create,
    CreateComposite,
    QueryComposite,
    QueryAllTransactions,
    History,
    Custom,
}

impl OperationKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Query,
        Self::Create,
        Self::CreateComposite,
        Self::QueryComposite,
        Self::QueryAllTransactions,
        Self::History,
        Self::Custom,
    ];

    /// Map a kind tag to a kind.
    ///
    /// Matching ignores ASCII case, `_` and `-`, so `createComposite`,
    /// `create_composite` and `CREATE-COMPOSITE` are the same tag.
    /// `queryAllTX` is accepted as an alias of `queryAllTransactions`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "query" => Self::Query,
            "create" => Self::Create,
            "createcomposite" => Self::CreateComposite,
            "querycomposite" => Self::QueryComposite,
            "queryalltx" | "queryalltransactions" => Self::QueryAllTransactions,
            "history" => Self::History,
            _ => Self::Custom,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Create => "Create",
            Self::CreateComposite => "CreateComposite",
            Self::QueryComposite => "QueryComposite",
            Self::QueryAllTransactions => "QueryAllTransactions",
            Self::History => "History",
            Self::Custom => "Custom",
        }
    }

    /// One-line description shown in the interactive menu.
    pub fn description(self) -> &'static str {
        match self {
            Self::Query => "Query (Retrieve data)",
            Self::Create => "Create (Add new data)",
            Self::CreateComposite => "Create with Composite Key (Add data with composite key)",
            Self::QueryComposite => {
                "Query with Composite Key (Retrieve data with composite key)"
            }
            Self::QueryAllTransactions => "Query All Transactions (Retrieve all transactions)",
            Self::History => "History (Get history of a key)",
            Self::Custom => "Custom (Define your own function)",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for OperationKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for OperationKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<OperationKind> for String {
    fn from(kind: OperationKind) -> Self {
        kind.as_str().to_string()
    }
}

/// One declared chaincode method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Method name, emitted verbatim.
    pub name: String,
    /// Template to build the method from. A missing kind is a custom stub.
    #[serde(
        default = "default_kind",
        alias = "type",
        deserialize_with = "deserialize_kind"
    )]
    pub kind: OperationKind,
}

fn default_kind() -> OperationKind {
    OperationKind::Custom
}

/// Accept any scalar as a kind: strings go through [`OperationKind::from_tag`],
/// null means no kind, and numbers, booleans or collections are custom stubs.
fn deserialize_kind<'de, D>(deserializer: D) -> Result<OperationKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(tag) => OperationKind::from_tag(&tag),
        serde_yaml::Value::Null => default_kind(),
        _ => OperationKind::Custom,
    })
}

impl OperationDescriptor {
    pub fn new(name: impl Into<String>, kind: OperationKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A chaincode project: its name and the ordered methods to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    pub name: String,
    #[serde(default)]
    pub operations: Vec<OperationDescriptor>,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, operations: Vec<OperationDescriptor>) -> Self {
        Self {
            name: name.into(),
            operations,
        }
    }

    /// Contract class name; see [`class_name`].
    pub fn class_name(&self) -> String {
        class_name(&self.name)
    }

    /// Name the entry module re-exports the contract under.
    pub fn export_name(&self) -> String {
        format!("{}Contract", self.name)
    }
}
