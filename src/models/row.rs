use std::collections::BTreeMap;

/// One tuple of a result set, or one record to insert: a mapping from column
/// name to a textual value representation.
///
/// A `BTreeMap` keeps iteration deterministic; wherever a row drives ordered
/// SQL fragments (SET/WHERE clauses), the clause order and the parameter
/// order come from the same single iteration.
pub type Row = BTreeMap<String, String>;
