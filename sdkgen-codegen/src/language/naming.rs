//! Naming conventions for target languages.

use std::collections::HashSet;

use sdkgen_ir::OperationName;

/// Language-specific naming conventions.
///
/// Casing functions receive the snake_case form of a name; every casing
/// helper in `sdkgen-core` re-splits its input, so digits and suffixes
/// survive (`get_dogs_2` → `getDogs2`).
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Operation name to callable name (e.g. `get_dogs` → `getDogs`)
    pub function_case: fn(&str) -> String,
    /// Operation name to constant name (e.g. `get_dogs` → `GET_DOGS`)
    pub constant_case: fn(&str) -> String,
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. `delete` → `deleteOp` in TypeScript)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn function_name(&self, name: &OperationName) -> String {
        self.safe_name(&(self.function_case)(&name.snake()))
    }

    pub fn constant_name(&self, name: &OperationName) -> String {
        self.safe_name(&(self.constant_case)(&name.snake()))
    }

    /// Callable names for `names`, in the same order.
    ///
    /// Escaping can map two names onto one identifier (`delete` and
    /// `delete_op` both become `deleteOp`); later names then get a numeric
    /// suffix.
    pub fn function_names<'a>(
        &self,
        names: impl IntoIterator<Item = &'a OperationName>,
    ) -> Vec<String> {
        let mut taken = HashSet::new();
        names
            .into_iter()
            .map(|name| {
                let base = self.function_name(name);
                let mut candidate = base.clone();
                let mut suffix = 2usize;
                while !taken.insert(candidate.clone()) {
                    candidate = format!("{}{}", base, suffix);
                    suffix += 1;
                }
                candidate
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_core::{to_camel_case, to_screaming_snake_case};

    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        function_case: to_camel_case,
        constant_case: to_screaming_snake_case,
        reserved_words: &["delete", "new"],
        escape_reserved: |name| format!("{}Op", name),
    };

    #[test]
    fn test_function_name_escapes() {
        assert_eq!(
            TEST_NAMING.function_name(&OperationName::new(["delete"])),
            "deleteOp"
        );
        assert_eq!(
            TEST_NAMING.function_name(&OperationName::new(["get", "dogs", "2"])),
            "getDogs2"
        );
        assert_eq!(
            TEST_NAMING.constant_name(&OperationName::new(["get", "dogs"])),
            "GET_DOGS"
        );
    }

    #[test]
    fn test_function_names_stay_unique() {
        let names = [
            OperationName::new(["delete"]),
            OperationName::new(["delete", "op"]),
        ];
        assert_eq!(
            TEST_NAMING.function_names(&names),
            vec!["deleteOp", "deleteOp2"]
        );
    }
}
