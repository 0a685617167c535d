use std::collections::BTreeMap;

/// One slash-command style invocation: a command name, string-valued
/// options, and the invoking user. Gateways produce these; handlers pull
/// typed values out.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub command: String,
    pub user_id: String,
    pub options: BTreeMap<String, String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            user_id: user_id.into(),
            options: BTreeMap::new(),
        }
    }

    /// Builder-style option setter, mostly for tests.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Integer option; `None` when absent or not a number.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_int_parses_or_none() {
        let inv = Invocation::new("remove", "u1")
            .with_option("index", "3")
            .with_option("junk", "abc");
        assert_eq!(inv.get_int("index"), Some(3));
        assert_eq!(inv.get_int("junk"), None);
        assert_eq!(inv.get_int("missing"), None);
    }

    #[test]
    fn get_returns_str() {
        let inv = Invocation::new("add", "u1").with_option("item", "buy milk");
        assert_eq!(inv.get("item"), Some("buy milk"));
        assert_eq!(inv.get("category"), None);
    }
}
