//! # chaincode-scaffold
//!
//! Operations in, chaincode project out.
//!
//! Turns an ordered list of `{name, kind}` operation descriptors into a
//! Hyperledger Fabric Node.js contract project: one contract class with a
//! method per operation, an entry module, a `package.json` and a README.
//!
//! ## Modules
//!
//! - [`schema`]: Operation and project descriptors, batch parsing, validation
//! - [`template`]: Map one operation to one contract method
//! - [`js`]: JavaScript syntax tree and emitter
//! - [`assemble`]: Build the contract class around the rendered methods
//! - [`skeleton`]: Entry module, manifest and README
//! - [`config`]: Constants embedded in generated files
//! - [`generate`]: End-to-end generation to disk
//! - [`collect`]: Interactive operation collector

pub mod assemble;
pub mod collect;
pub mod config;
pub mod error;
pub mod generate;
pub mod js;
pub mod schema;
pub mod skeleton;
pub mod template;
