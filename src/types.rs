/*!
 * Core types and data structures for the gvexport application
 */

use std::collections::BTreeMap;

/// A single global variable definition read from a substvar document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalVariable {
    /// Variable name
    pub name: String,
    /// Variable value
    pub value: String,
}

/// Merged mapping of composite keys to variable values
///
/// Keys are the path-derived prefix concatenated directly with the variable
/// name. A `BTreeMap` keeps iteration (and therefore the serialized JSON) in
/// sorted key order, so repeated runs over the same tree produce identical
/// output.
pub type VariableMap = BTreeMap<String, String>;
