//! Project skeleton around the contract.
//!
//! Produces the entry module the Fabric runtime loads, the `package.json`
//! manifest, and a README listing the declared operations.

mod entry;
mod manifest;
mod readme;

pub use entry::{entry_module, entry_source};
pub use manifest::{manifest, manifest_source, PackageManifest};
pub use readme::readme;

/// Path of the contract module, relative to the project root.
pub const CHAINCODE_PATH: &str = "lib/chaincode.js";
/// Path of the entry module, relative to the project root.
pub const ENTRY_PATH: &str = "index.js";
pub const MANIFEST_PATH: &str = "package.json";
pub const README_PATH: &str = "README.md";
