//! Target repository identifier.

use std::{fmt, str::FromStr};

use crate::error::TaggerError;

/// A fully-qualified `owner/name` repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl FromStr for Repository {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| TaggerError::InvalidRepository(s.to_string()))?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(TaggerError::InvalidRepository(s.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
