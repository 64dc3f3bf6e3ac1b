// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server Entity
//!
//! A virtual server as reported by the ProfitBricks API, composing its
//! connected storages and network interfaces by value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::invariants::{require_id, DomainError, DomainResult};
use super::{AvailabilityZone, Nic, OsType, ProvisioningState, Storage};

/// Virtual machine state of a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServerStatus {
    NoState,
    Running,
    Blocked,
    Paused,
    Shutdown,
    Shutoff,
    Crashed,
    Unrecognized,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoState => "NOSTATE",
            Self::Running => "RUNNING",
            Self::Blocked => "BLOCKED",
            Self::Paused => "PAUSED",
            Self::Shutdown => "SHUTDOWN",
            Self::Shutoff => "SHUTOFF",
            Self::Crashed => "CRASHED",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "NOSTATE" => Self::NoState,
            "RUNNING" => Self::Running,
            "BLOCKED" => Self::Blocked,
            "PAUSED" => Self::Paused,
            "SHUTDOWN" => Self::Shutdown,
            "SHUTOFF" => Self::Shutoff,
            "CRASHED" => Self::Crashed,
            _ => Self::Unrecognized,
        }
    }

    /// Check if the virtual machine is powered on
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for ServerStatus {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

/// Server value object
///
/// # Invariants
/// - `id` is a non-empty opaque identifier
/// - `storages` and `nics` keep the order the provider reported them in
///
/// `last_modification_time >= creation_time` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ServerBuilder")]
pub struct Server {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    cores: i32,
    /// Memory in MB
    ram: i32,
    has_internet_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ProvisioningState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ServerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modification_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_type: Option<OsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_zone: Option<AvailabilityZone>,
    cpu_hot_plug: bool,
    ram_hot_plug: bool,
    nic_hot_plug: bool,
    nic_hot_unplug: bool,
    disc_virtio_hot_plug: bool,
    disc_virtio_hot_unplug: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    storages: Vec<Storage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nics: Vec<Nic>,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn cores(&self) -> i32 {
        self.cores
    }

    /// Memory in MB
    pub fn ram(&self) -> i32 {
        self.ram
    }

    pub fn has_internet_access(&self) -> bool {
        self.has_internet_access
    }

    pub fn state(&self) -> Option<ProvisioningState> {
        self.state
    }

    pub fn status(&self) -> Option<ServerStatus> {
        self.status
    }

    pub fn creation_time(&self) -> Option<DateTime<Utc>> {
        self.creation_time
    }

    pub fn last_modification_time(&self) -> Option<DateTime<Utc>> {
        self.last_modification_time
    }

    pub fn os_type(&self) -> Option<OsType> {
        self.os_type
    }

    pub fn availability_zone(&self) -> Option<AvailabilityZone> {
        self.availability_zone
    }

    pub fn is_cpu_hot_plug(&self) -> bool {
        self.cpu_hot_plug
    }

    pub fn is_ram_hot_plug(&self) -> bool {
        self.ram_hot_plug
    }

    pub fn is_nic_hot_plug(&self) -> bool {
        self.nic_hot_plug
    }

    pub fn is_nic_hot_unplug(&self) -> bool {
        self.nic_hot_unplug
    }

    pub fn is_disc_virtio_hot_plug(&self) -> bool {
        self.disc_virtio_hot_plug
    }

    pub fn is_disc_virtio_hot_unplug(&self) -> bool {
        self.disc_virtio_hot_unplug
    }

    /// Connected storages, in the order the provider listed them
    pub fn storages(&self) -> &[Storage] {
        &self.storages
    }

    /// Network interfaces, in the order the provider listed them
    pub fn nics(&self) -> &[Nic] {
        &self.nics
    }

    /// Look up a nic by id
    pub fn nic(&self, id: &str) -> Option<&Nic> {
        self.nics.iter().find(|nic| nic.id() == id)
    }

    /// Nics whose `server_id` back-reference disagrees with this server
    pub fn foreign_nics(&self) -> impl Iterator<Item = &Nic> {
        self.nics
            .iter()
            .filter(move |nic| matches!(nic.server_id(), Some(id) if id != self.id))
    }
}

/// Builder for [`Server`]
///
/// Mutable draft that the response parser fills in while the document
/// streams, and that callers use directly to construct expected values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerBuilder {
    id: Option<String>,
    name: Option<String>,
    cores: i32,
    ram: i32,
    has_internet_access: bool,
    state: Option<ProvisioningState>,
    status: Option<ServerStatus>,
    creation_time: Option<DateTime<Utc>>,
    last_modification_time: Option<DateTime<Utc>>,
    os_type: Option<OsType>,
    availability_zone: Option<AvailabilityZone>,
    cpu_hot_plug: bool,
    ram_hot_plug: bool,
    nic_hot_plug: bool,
    nic_hot_unplug: bool,
    disc_virtio_hot_plug: bool,
    disc_virtio_hot_unplug: bool,
    storages: Vec<Storage>,
    nics: Vec<Nic>,
}

impl ServerBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cores(mut self, cores: i32) -> Self {
        self.cores = cores;
        self
    }

    pub fn ram(mut self, ram: i32) -> Self {
        self.ram = ram;
        self
    }

    pub fn has_internet_access(mut self, has_internet_access: bool) -> Self {
        self.has_internet_access = has_internet_access;
        self
    }

    pub fn state(mut self, state: ProvisioningState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn status(mut self, status: ServerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn creation_time(mut self, creation_time: DateTime<Utc>) -> Self {
        self.creation_time = Some(creation_time);
        self
    }

    pub fn last_modification_time(mut self, last_modification_time: DateTime<Utc>) -> Self {
        self.last_modification_time = Some(last_modification_time);
        self
    }

    pub fn os_type(mut self, os_type: OsType) -> Self {
        self.os_type = Some(os_type);
        self
    }

    pub fn availability_zone(mut self, availability_zone: AvailabilityZone) -> Self {
        self.availability_zone = Some(availability_zone);
        self
    }

    pub fn cpu_hot_plug(mut self, enabled: bool) -> Self {
        self.cpu_hot_plug = enabled;
        self
    }

    pub fn ram_hot_plug(mut self, enabled: bool) -> Self {
        self.ram_hot_plug = enabled;
        self
    }

    pub fn nic_hot_plug(mut self, enabled: bool) -> Self {
        self.nic_hot_plug = enabled;
        self
    }

    pub fn nic_hot_unplug(mut self, enabled: bool) -> Self {
        self.nic_hot_unplug = enabled;
        self
    }

    pub fn disc_virtio_hot_plug(mut self, enabled: bool) -> Self {
        self.disc_virtio_hot_plug = enabled;
        self
    }

    pub fn disc_virtio_hot_unplug(mut self, enabled: bool) -> Self {
        self.disc_virtio_hot_unplug = enabled;
        self
    }

    /// Replace the storage list
    pub fn storages(mut self, storages: impl IntoIterator<Item = Storage>) -> Self {
        self.storages = storages.into_iter().collect();
        self
    }

    /// Append one storage after those already present
    pub fn storage(mut self, storage: Storage) -> Self {
        self.storages.push(storage);
        self
    }

    /// Replace the nic list
    pub fn nics(mut self, nics: impl IntoIterator<Item = Nic>) -> Self {
        self.nics = nics.into_iter().collect();
        self
    }

    /// Append one nic after those already present
    pub fn nic(mut self, nic: Nic) -> Self {
        self.nics.push(nic);
        self
    }

    pub fn build(self) -> DomainResult<Server> {
        Ok(Server {
            id: require_id("Server", self.id)?,
            name: self.name,
            cores: self.cores,
            ram: self.ram,
            has_internet_access: self.has_internet_access,
            state: self.state,
            status: self.status,
            creation_time: self.creation_time,
            last_modification_time: self.last_modification_time,
            os_type: self.os_type,
            availability_zone: self.availability_zone,
            cpu_hot_plug: self.cpu_hot_plug,
            ram_hot_plug: self.ram_hot_plug,
            nic_hot_plug: self.nic_hot_plug,
            nic_hot_unplug: self.nic_hot_unplug,
            disc_virtio_hot_plug: self.disc_virtio_hot_plug,
            disc_virtio_hot_unplug: self.disc_virtio_hot_unplug,
            storages: self.storages,
            nics: self.nics,
        })
    }
}

impl TryFrom<ServerBuilder> for Server {
    type Error = DomainError;

    fn try_from(builder: ServerBuilder) -> DomainResult<Self> {
        builder.build()
    }
}
