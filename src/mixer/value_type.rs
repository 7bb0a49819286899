use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Kind of values a mixer control holds, as tagged in the `tinymix` dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Enum,
    Int,
    Byte,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value type: '{0}'")]
pub struct UnknownValueType(pub String);

impl ValueType {
    /// Canonical uppercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Bool => "BOOL",
            ValueType::Enum => "ENUM",
            ValueType::Int => "INT",
            ValueType::Byte => "BYTE",
        }
    }

    /// Parse a tag case-insensitively, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, UnknownValueType> {
        let tag = s.trim_matches([' ', '\t', '\n', '\r']).to_uppercase();
        match tag.as_str() {
            "BOOL" => Ok(ValueType::Bool),
            "ENUM" => Ok(ValueType::Enum),
            "INT" => Ok(ValueType::Int),
            "BYTE" => Ok(ValueType::Byte),
            _ => Err(UnknownValueType(tag)),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ValueType::parse(&s).map_err(serde::de::Error::custom)
    }
}
