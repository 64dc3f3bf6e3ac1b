// Copyright (c) 2025 - Cowboy AI, Inc.
//! Provider Enumerations
//!
//! Lifecycle and placement vocabularies reported by ProfitBricks. Decoding is
//! lenient: values the provider adds later map to `Unrecognized` instead of
//! failing the whole response.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a provisioned resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProvisioningState {
    /// Resource is not active
    Inactive,
    /// Provisioning is still in progress
    InProcess,
    /// Resource is ready for use
    Available,
    /// Resource has been deleted
    Deleted,
    /// Provisioning failed
    Error,
    /// Value not known to this client
    Unrecognized,
}

impl ProvisioningState {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::InProcess => "INPROCESS",
            Self::Available => "AVAILABLE",
            Self::Deleted => "DELETED",
            Self::Error => "ERROR",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Parse from the wire representation
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "INACTIVE" => Self::Inactive,
            "INPROCESS" | "IN_PROCESS" => Self::InProcess,
            "AVAILABLE" => Self::Available,
            "DELETED" => Self::Deleted,
            "ERROR" => Self::Error,
            _ => Self::Unrecognized,
        }
    }

    /// Check if the resource can be used
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for ProvisioningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ProvisioningState {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Operating system family of a server or image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OsType {
    Windows,
    Linux,
    Other,
    Unrecognized,
}

impl OsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "WINDOWS",
            Self::Linux => "LINUX",
            Self::Other => "OTHER",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "WINDOWS" => Self::Windows,
            "LINUX" => Self::Linux,
            "OTHER" => Self::Other,
            _ => Self::Unrecognized,
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for OsType {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Placement zone inside a data center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityZone {
    /// Provider picks the zone
    #[serde(rename = "AUTO")]
    Auto,
    #[serde(rename = "ZONE_1")]
    Zone1,
    #[serde(rename = "ZONE_2")]
    Zone2,
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
}

impl AvailabilityZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Zone1 => "ZONE_1",
            Self::Zone2 => "ZONE_2",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "AUTO" => Self::Auto,
            "ZONE_1" | "ZONE1" => Self::Zone1,
            "ZONE_2" | "ZONE2" => Self::Zone2,
            _ => Self::Unrecognized,
        }
    }
}

impl fmt::Display for AvailabilityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for AvailabilityZone {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}
