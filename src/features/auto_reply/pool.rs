//! Canned response pool
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.1.0
//!
//! Optional YAML override:
//!
//! ```yaml
//! responses:
//!   - "I'm away from the keyboard right now."
//!   - "Got your message, I'll get back to you soon."
//! ```

use anyhow::Result;
use rand::seq::IndexedRandom;
use serde::Deserialize;

const BUILTIN_RESPONSES: &[&str] = &[
    "Thanks for your message! I'll get back to you soon.",
    "I'm a bit busy right now, but I've seen this.",
    "Got it 👍 I'll reply as soon as I can.",
    "Away from the keyboard at the moment. Talk soon!",
    "Message received. Hang tight!",
];

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePool {
    pub responses: Vec<String>,
}

impl ResponsePool {
    pub fn builtin() -> Self {
        ResponsePool {
            responses: BUILTIN_RESPONSES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load a pool from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let pool: ResponsePool = serde_yaml::from_str(contents)?;
        pool.validate()?;
        Ok(pool)
    }

    pub fn validate(&self) -> Result<()> {
        if self.responses.is_empty() {
            return Err(anyhow::anyhow!("Response pool must contain at least one entry"));
        }
        if let Some(pos) = self.responses.iter().position(|r| r.trim().is_empty()) {
            return Err(anyhow::anyhow!("Response #{} in pool is empty", pos + 1));
        }
        Ok(())
    }

    /// Uniformly random entry
    pub fn pick(&self) -> Option<&str> {
        self.responses.choose(&mut rand::rng()).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pool_is_valid() {
        let pool = ResponsePool::builtin();
        assert!(pool.validate().is_ok());
        assert_eq!(pool.len(), BUILTIN_RESPONSES.len());
    }

    #[test]
    fn test_pick_returns_member() {
        let pool = ResponsePool::builtin();
        for _ in 0..20 {
            let picked = pool.pick().unwrap();
            assert!(pool.responses.iter().any(|r| r == picked));
        }
    }

    #[test]
    fn test_from_yaml() {
        let pool = ResponsePool::from_yaml("responses:\n  - \"brb\"\n  - \"later\"\n").unwrap();
        assert_eq!(pool.responses, vec!["brb", "later"]);
    }

    #[test]
    fn test_from_yaml_rejects_empty_entries() {
        assert!(ResponsePool::from_yaml("responses: []").is_err());
        assert!(ResponsePool::from_yaml("responses:\n  - \"  \"\n").is_err());
        assert!(ResponsePool::from_yaml("nope: 1").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ResponsePool::load("/definitely/not/here.yaml").is_err());
    }
}
