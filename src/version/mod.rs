// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// A dotted numeric version such as `30.0.3`, as used by SDK component
/// directory names.
///
/// Components are compared left to right and missing trailing components
/// compare as zero, so `30.0` and `30.0.0` are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    pub components: Vec<u32>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![major, minor, patch],
        }
    }

    pub fn from_components(components: Vec<u32>) -> Self {
        Self { components }
    }

    /// Parses a directory name fragment.
    ///
    /// Returns `None` unless every `.`-separated segment is a non-empty run of
    /// ASCII digits that fits in a `u32`. Names like `canary`, `1.a.0`, `.1`
    /// or `1.` are not versions.
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let mut components = Vec::new();
        for segment in name.split('.') {
            // u32::from_str accepts a leading '+', directory names must not
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            components.push(segment.parse::<u32>().ok()?);
        }

        Some(Self { components })
    }

    fn component_or_zero(&self, index: usize) -> u32 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component_or_zero(i).cmp(&other.component_or_zero(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| SdkError::InvalidVersionFormat(s.to_string()))
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parsing() {
        assert_eq!(Version::parse("30.0.3"), Some(Version::new(30, 0, 3)));
        assert_eq!(
            Version::parse("6.0").map(|v| v.components),
            Some(vec![6, 0])
        );
        assert_eq!(
            Version::parse("35").map(|v| v.components),
            Some(vec![35])
        );
        assert_eq!(
            Version::parse("1.2.3.4").map(|v| v.components),
            Some(vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn test_non_versions_are_absent() {
        for name in [
            "", "canary", "1.a.0", ".1", "1.", "1..2", "latest", "-1", "+1", "30.0.3-rc1",
            "4294967296",
        ] {
            assert!(Version::parse(name).is_none(), "{name:?} should not parse");
        }
    }

    #[test]
    fn test_from_str_reports_invalid_format() {
        match Version::from_str("preview") {
            Err(SdkError::InvalidVersionFormat(value)) => assert_eq!(value, "preview"),
            other => panic!("Expected InvalidVersionFormat, got {other:?}"),
        }
        assert_eq!(Version::from_str("29.0.2").unwrap(), Version::new(29, 0, 2));
    }

    #[test]
    fn test_numeric_not_lexical_ordering() {
        let v9 = Version::parse("9.0.0").unwrap();
        let v10 = Version::parse("10.0.0").unwrap();
        assert!(v10 > v9);

        let mut versions = vec![v9.clone(), v10.clone()];
        versions.sort_by(|a, b| b.cmp(a));
        assert_eq!(versions, vec![v10, v9]);
    }

    #[test]
    fn test_missing_components_compare_as_zero() {
        assert_eq!(Version::parse("30.0").unwrap(), Version::new(30, 0, 0));
        assert!(Version::parse("30.0.1").unwrap() > Version::parse("30").unwrap());
        assert!(Version::parse("29.9").unwrap() < Version::parse("30").unwrap());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(34, 0, 0).to_string(), "34.0.0");
        assert_eq!(Version::parse("6.0").unwrap().to_string(), "6.0");
    }
}
