//! Raw input model, as deserialized from Graphviz `-Tjson` output.

pub mod types;
