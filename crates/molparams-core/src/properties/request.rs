use super::{PropertyCategory, category_of, ground_state_equivalent};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// An unordered pair of adiabatic state indices, stored with the lower index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatePair {
    lower: usize,
    upper: usize,
}

impl StatePair {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> usize {
        self.upper
    }

    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    pub fn involves_ground_state(&self) -> bool {
        self.lower == 0
    }
}

impl From<(usize, usize)> for StatePair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for StatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    Bare,
    States(Vec<usize>),
    Pairs(Vec<StatePair>),
}

impl RequestTarget {
    pub fn shape(&self) -> &'static str {
        match self {
            RequestTarget::Bare => "a bare keyword",
            RequestTarget::States(_) => "a list of state indices",
            RequestTarget::Pairs(_) => "a list of state pairs",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    #[error(
        "Ground-state property '{name}' was requested per state. Request it as a bare keyword, or use its excited-state counterpart if per-state values are intended."
    )]
    AmbiguousShape { name: String },

    #[error("Property '{name}' is a {category} property and expects {expected}, got {found}")]
    ShapeMismatch {
        name: String,
        category: PropertyCategory,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Property '{name}' was requested with an empty list")]
    EmptyTarget { name: String },

    #[error("Property '{name}' was requested for the pair ({state}, {state}); pairs need two distinct states")]
    DegeneratePair { name: String, state: usize },
}

/// A request for computed properties: an ordered mapping from property name to
/// the states it is requested for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRequest {
    entries: Vec<(String, RequestTarget)>,
}

impl PropertyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request for ground-state properties given as a plain keyword list.
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        keywords
            .into_iter()
            .fold(Self::new(), |request, keyword| request.bare(keyword))
    }

    pub fn bare(mut self, name: impl Into<String>) -> Self {
        self.insert(name, RequestTarget::Bare);
        self
    }

    pub fn states(mut self, name: impl Into<String>, states: impl IntoIterator<Item = usize>) -> Self {
        self.insert(name, RequestTarget::States(states.into_iter().collect()));
        self
    }

    pub fn pairs<P>(mut self, name: impl Into<String>, pairs: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<StatePair>,
    {
        self.insert(
            name,
            RequestTarget::Pairs(pairs.into_iter().map(Into::into).collect()),
        );
        self
    }

    /// Inserts or replaces the entry for `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, target: RequestTarget) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = target,
            None => self.entries.push((name, target)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequestTarget)> {
        self.entries.iter().map(|(name, target)| (name.as_str(), target))
    }

    /// Checks every entry against the property vocabulary and returns the first
    /// violation. Shapes are never reinterpreted: a ground-state property requested
    /// with state indices is reported as ambiguous rather than guessed at.
    pub fn validate(&self) -> Result<ValidatedRequest, RequestError> {
        let mut validated = ValidatedRequest::default();

        for (name, target) in &self.entries {
            let category =
                category_of(name).ok_or_else(|| RequestError::UnknownProperty(name.clone()))?;

            match (category, target) {
                (PropertyCategory::GroundState, RequestTarget::Bare) => {
                    validated.ground_state.push(name.clone());
                }
                (PropertyCategory::GroundState, RequestTarget::States(_)) => {
                    return Err(RequestError::AmbiguousShape { name: name.clone() });
                }
                (PropertyCategory::ExcitedState, RequestTarget::States(states)) => {
                    if states.is_empty() {
                        return Err(RequestError::EmptyTarget { name: name.clone() });
                    }
                    let states: BTreeSet<usize> = states.iter().copied().collect();
                    validated
                        .excited_state
                        .push((name.clone(), states.into_iter().collect()));
                }
                (PropertyCategory::Multistate, RequestTarget::Pairs(pairs)) => {
                    if pairs.is_empty() {
                        return Err(RequestError::EmptyTarget { name: name.clone() });
                    }
                    if let Some(pair) = pairs.iter().find(|p| p.is_degenerate()) {
                        return Err(RequestError::DegeneratePair {
                            name: name.clone(),
                            state: pair.lower(),
                        });
                    }
                    let pairs: BTreeSet<StatePair> = pairs.iter().copied().collect();
                    validated
                        .multistate
                        .push((name.clone(), pairs.into_iter().collect()));
                }
                (category, target) => {
                    return Err(RequestError::ShapeMismatch {
                        name: name.clone(),
                        category,
                        expected: category.expected_shape(),
                        found: target.shape(),
                    });
                }
            }
        }

        debug!(
            ground_state = validated.ground_state.len(),
            excited_state = validated.excited_state.len(),
            multistate = validated.multistate.len(),
            "Validated property request."
        );
        Ok(validated)
    }
}

/// A request that passed validation, split by category.
///
/// State lists are sorted and deduplicated; pairs are normalized so that `(2, 0)`
/// and `(0, 2)` are the same request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedRequest {
    ground_state: Vec<String>,
    excited_state: Vec<(String, Vec<usize>)>,
    multistate: Vec<(String, Vec<StatePair>)>,
}

impl ValidatedRequest {
    pub fn ground_state(&self) -> &[String] {
        &self.ground_state
    }

    pub fn excited_state(&self) -> &[(String, Vec<usize>)] {
        &self.excited_state
    }

    pub fn multistate(&self) -> &[(String, Vec<StatePair>)] {
        &self.multistate
    }

    /// Ground-state properties implied by excited-state requests that include state 0.
    pub fn ground_state_equivalents(&self) -> Vec<&'static str> {
        self.excited_state
            .iter()
            .filter(|(_, states)| states.contains(&0))
            .filter_map(|(name, _)| ground_state_equivalent(name))
            .collect()
    }

    /// Whether the ground-state `property` is needed, either requested directly or
    /// through its excited-state counterpart at state 0.
    pub fn requires_ground_state(&self, property: &str) -> bool {
        self.ground_state.iter().any(|p| p == property)
            || self
                .ground_state_equivalents()
                .iter()
                .any(|&p| p == property)
    }

    /// The highest adiabatic state index referenced anywhere in the request.
    pub fn max_state(&self) -> Option<usize> {
        let from_states = self
            .excited_state
            .iter()
            .flat_map(|(_, states)| states.iter().copied());
        let from_pairs = self
            .multistate
            .iter()
            .flat_map(|(_, pairs)| pairs.iter().map(StatePair::upper));
        from_states.chain(from_pairs).max()
    }
}
