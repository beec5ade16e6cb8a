use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Add a formatted message to an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ErrorTree
///
/// Route-aware aggregation of definition-time violations. Routes are
/// `Model.field` paths; messages without a route sit at the root. The tree
/// flattens deterministically, so one failed build reports every violation
/// in a stable order.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Record a violation at this node.
    pub fn add(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Subtree for the given route, created on first use.
    pub fn route(&mut self, key: &str) -> &mut Self {
        self.children.entry(key.to_string()).or_default()
    }

    /// Fold another tree into this one, keeping both sides' messages.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        for (key, child) in other.children {
            self.children.entry(key).or_default().merge(child);
        }
    }

    /// Fold another tree in under the given route.
    pub fn merge_at(&mut self, route: &str, other: Self) {
        self.route(route).merge(other);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Flattened `route: message` lines in route order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len());
        self.flatten(None, &mut out);
        out
    }

    fn flatten(&self, prefix: Option<&str>, out: &mut Vec<String>) {
        for message in &self.errors {
            match prefix {
                Some(route) => out.push(format!("{route}: {message}")),
                None => out.push(message.clone()),
            }
        }

        for (key, child) in &self.children {
            let route = match prefix {
                Some(route) => format!("{route}.{key}"),
                None => key.clone(),
            };
            child.flatten(Some(&route), out);
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("; "))
    }
}
