//! Shared helpers used by the section validators.

use std::collections::HashSet;

/// Push an error for every blank or repeated id in `ids`.
pub(crate) fn validate_id_list(errors: &mut Vec<String>, name: &str, ids: &[String]) {
    let mut seen = HashSet::new();
    for (i, id) in ids.iter().enumerate() {
        if id.trim().is_empty() {
            errors.push(format!("{name}[{i}] is empty"));
        } else if !seen.insert(id.as_str()) {
            errors.push(format!("{name}[{i}] = \"{id}\" is listed more than once"));
        }
    }
}
