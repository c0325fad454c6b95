use crate::ordered_map::OrderedMap;

use super::{FileEntry, PathAlias, ToolEntry};

/// Text a `$name` reference to an entry expands to.
pub(super) trait VarValue {
    fn var_value(&self) -> &str;
}

impl VarValue for ToolEntry {
    fn var_value(&self) -> &str {
        &self.command
    }
}

impl VarValue for PathAlias {
    fn var_value(&self) -> &str {
        &self.path
    }
}

impl VarValue for FileEntry {
    fn var_value(&self) -> &str {
        &self.path
    }
}

/// Replace every `$name` in `text` with the value of `name` in `vars`.
///
/// Names are tried in reverse declaration order, each one once, so the
/// earliest declared name is applied last. When names are prefixes of each
/// other (`$home` and `$homework`) or a replacement itself contains a
/// `$name`, the outcome depends on this order.
pub(super) fn substitute<V: VarValue>(text: &str, vars: &OrderedMap<String, V>) -> String {
    let mut out = text.to_string();
    for (name, value) in vars.iter().rev() {
        let token = format!("${name}");
        if out.contains(&token) {
            log::trace!("substituting {token} -> {}", value.var_value());
            out = out.replace(&token, value.var_value());
        }
    }
    out
}
