use molparams::properties::{PropertyRequest, RequestTarget, StatePair};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Property name cannot be empty in request entry '{0}'.")]
    EmptyName(String),

    #[error("No states given in request entry '{0}'. Expected 'name=1,2' or 'name=0:1'.")]
    EmptyList(String),

    #[error("Invalid state index '{token}' in request entry '{entry}'. Expected a non-negative integer.")]
    InvalidState { entry: String, token: String },

    #[error("Invalid state pair '{token}' in request entry '{entry}'. Expected 'i:j' (e.g., '0:1').")]
    InvalidPair { entry: String, token: String },

    #[error("Request entry '{0}' mixes single states and state pairs.")]
    MixedTargets(String),
}

/// Parses one command-line request entry.
///
/// - `name` is a bare keyword.
/// - `name=1,2` lists state indices.
/// - `name=0:1,0:2` lists state pairs.
pub fn parse_request_entry(entry: &str) -> Result<(String, RequestTarget), ParseError> {
    let (name, list) = match entry.split_once('=') {
        Some((name, list)) => (name.trim(), Some(list.trim())),
        None => (entry.trim(), None),
    };
    if name.is_empty() {
        return Err(ParseError::EmptyName(entry.to_string()));
    }

    let Some(list) = list else {
        return Ok((name.to_string(), RequestTarget::Bare));
    };

    let tokens: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(ParseError::EmptyList(entry.to_string()));
    }

    let pair_count = tokens.iter().filter(|t| t.contains(':')).count();
    let target = if pair_count == 0 {
        let states = tokens
            .iter()
            .map(|t| parse_state(entry, t))
            .collect::<Result<Vec<_>, _>>()?;
        RequestTarget::States(states)
    } else if pair_count == tokens.len() {
        let pairs = tokens
            .iter()
            .map(|t| parse_pair(entry, t))
            .collect::<Result<Vec<_>, _>>()?;
        RequestTarget::Pairs(pairs)
    } else {
        return Err(ParseError::MixedTargets(entry.to_string()));
    };

    Ok((name.to_string(), target))
}

pub fn parse_request<S: AsRef<str>>(entries: &[S]) -> Result<PropertyRequest, ParseError> {
    let mut request = PropertyRequest::new();
    for entry in entries {
        let (name, target) = parse_request_entry(entry.as_ref())?;
        request.insert(name, target);
    }
    Ok(request)
}

fn parse_state(entry: &str, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidState {
        entry: entry.to_string(),
        token: token.to_string(),
    })
}

fn parse_pair(entry: &str, token: &str) -> Result<StatePair, ParseError> {
    let invalid = || ParseError::InvalidPair {
        entry: entry.to_string(),
        token: token.to_string(),
    };
    let (a, b) = token.split_once(':').ok_or_else(invalid)?;
    let a = a.trim().parse().map_err(|_| invalid())?;
    let b = b.trim().parse().map_err(|_| invalid())?;
    Ok(StatePair::new(a, b))
}
