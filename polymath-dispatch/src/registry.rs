//! Function Registry
//!
//! Built once during initialization, then shared behind an `Arc` and only
//! read. Callers that keep the `Arc<TypedFunction>` handles skip the name
//! lookup entirely.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use polymath_core::{MathError, Value};
use serde::Serialize;
use tracing::debug;
use crate::{FunctionMeta, Signature, TypedFunction};

/// Help entry for one function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionHelp {
    pub name: String,
    pub signatures: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<FunctionMeta>,
}

/// Central function registry
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<TypedFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    pub fn with_function(self, f: TypedFunction) -> Self {
        self.with_shared(Arc::new(f))
    }

    /// Add a function whose handle is also held elsewhere
    pub fn with_shared(mut self, f: Arc<TypedFunction>) -> Self {
        self.insert(f);
        self
    }

    /// Build a function from ordered signatures, add it, and return its handle
    pub fn register(&mut self, name: &str, signatures: Vec<Signature>) -> Arc<TypedFunction> {
        let f = signatures.into_iter()
            .fold(TypedFunction::builder(name), |b, s| b.signature(s))
            .build();
        let handle = Arc::new(f);
        self.insert(handle.clone());
        handle
    }

    fn insert(&mut self, f: Arc<TypedFunction>) {
        let name = f.name().to_lowercase();
        debug!(function = %name, "registered function");
        self.functions.insert(name, f);
    }

    pub fn get(&self, name: &str) -> Option<Arc<TypedFunction>> {
        self.functions.get(&name.to_lowercase()).cloned()
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, MathError> {
        match self.functions.get(&name.to_lowercase()) {
            Some(f) => f.call(args),
            None => {
                let similar = self.find_similar_functions(name);
                let mut err = MathError::undefined_func(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(5).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!("Similar: {}", suggestions.join(", ")));
                }
                Err(err)
            }
        }
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn help(&self, name: &str) -> Option<FunctionHelp> {
        self.functions.get(&name.to_lowercase()).map(|f| FunctionHelp {
            name: f.name().to_string(),
            signatures: f.signatures().iter().map(|s| s.to_string()).collect(),
            meta: f.meta().cloned(),
        })
    }

    /// Metadata of all documented functions, optionally filtered by category
    pub fn list_functions(&self, category: Option<&str>) -> Vec<FunctionMeta> {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .filter_map(|f| f.meta().cloned())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by_key(|m| m.name);
        metas
    }

    /// Names similar to `name`, best first
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.functions.keys()
            .filter_map(|func_name| {
                let score = Self::similarity_score(&name_lower, func_name);
                (score > 0).then(|| (func_name.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}
