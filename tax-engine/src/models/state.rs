use serde::{Deserialize, Serialize};

use crate::error::TaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateCode {
    Pa,
    Ny,
}

impl StateCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pa => "PA",
            Self::Ny => "NY",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PA" => Some(Self::Pa),
            "NY" => Some(Self::Ny),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse), but surfaces an unsupported code as a
    /// [`TaxError::UnsupportedJurisdiction`] for callers working from raw input.
    pub fn from_code(code: &str) -> Result<Self, TaxError> {
        Self::parse(code).ok_or_else(|| TaxError::UnsupportedJurisdiction(code.to_owned()))
    }
}
