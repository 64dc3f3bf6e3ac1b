// Copyright (c) 2025 - Cowboy AI, Inc.
//! Storage volume connected to a server

use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{require_id, DomainError, DomainResult};

/// Bus a storage volume is attached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BusType {
    Ide,
    Scsi,
    Virtio,
    Unrecognized,
}

impl BusType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ide => "IDE",
            Self::Scsi => "SCSI",
            Self::Virtio => "VIRTIO",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "IDE" => Self::Ide,
            "SCSI" => Self::Scsi,
            "VIRTIO" => Self::Virtio,
            _ => Self::Unrecognized,
        }
    }

    /// Check if the volume supports virtio hot plugging
    pub fn is_virtio(&self) -> bool {
        matches!(self, Self::Virtio)
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for BusType {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Storage value object
///
/// Owned by exactly one [`Server`](super::Server). Size is reported in GB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StorageBuilder")]
pub struct Storage {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    boot_device: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    bus_type: Option<BusType>,
    device_number: i32,
    size: f32,
}

impl Storage {
    pub fn builder() -> StorageBuilder {
        StorageBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn boot_device(&self) -> bool {
        self.boot_device
    }

    pub fn bus_type(&self) -> Option<BusType> {
        self.bus_type
    }

    pub fn device_number(&self) -> i32 {
        self.device_number
    }

    /// Size in GB
    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Builder for [`Storage`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageBuilder {
    id: Option<String>,
    name: Option<String>,
    boot_device: bool,
    bus_type: Option<BusType>,
    device_number: i32,
    size: f32,
}

impl StorageBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn boot_device(mut self, boot_device: bool) -> Self {
        self.boot_device = boot_device;
        self
    }

    pub fn bus_type(mut self, bus_type: BusType) -> Self {
        self.bus_type = Some(bus_type);
        self
    }

    pub fn device_number(mut self, device_number: i32) -> Self {
        self.device_number = device_number;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> DomainResult<Storage> {
        Ok(Storage {
            id: require_id("Storage", self.id)?,
            name: self.name,
            boot_device: self.boot_device,
            bus_type: self.bus_type,
            device_number: self.device_number,
            size: self.size,
        })
    }
}

impl TryFrom<StorageBuilder> for Storage {
    type Error = DomainError;

    fn try_from(builder: StorageBuilder) -> DomainResult<Self> {
        builder.build()
    }
}
