// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network interface attached to a server

use serde::{Deserialize, Serialize};

use super::invariants::{require_id, DomainError, DomainResult};
use super::{Firewall, ProvisioningState};

/// Network interface value object
///
/// `server_id` and `data_center_id` are back-references reported by the
/// provider; the owning [`Server`](super::Server) holds the nic by value.
/// The firewall is optional and absence is distinct from an inactive
/// firewall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "NicBuilder")]
pub struct Nic {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_center_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    server_id: Option<String>,
    lan_id: i32,
    internet_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mac_address: Option<String>,
    dhcp_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    gateway_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ProvisioningState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    firewall: Option<Firewall>,
}

impl Nic {
    pub fn builder() -> NicBuilder {
        NicBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data_center_id(&self) -> Option<&str> {
        self.data_center_id.as_deref()
    }

    pub fn server_id(&self) -> Option<&str> {
        self.server_id.as_deref()
    }

    pub fn lan_id(&self) -> i32 {
        self.lan_id
    }

    pub fn internet_access(&self) -> bool {
        self.internet_access
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    pub fn dhcp_active(&self) -> bool {
        self.dhcp_active
    }

    pub fn gateway_ip(&self) -> Option<&str> {
        self.gateway_ip.as_deref()
    }

    pub fn state(&self) -> Option<ProvisioningState> {
        self.state
    }

    pub fn firewall(&self) -> Option<&Firewall> {
        self.firewall.as_ref()
    }
}

/// Builder for [`Nic`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NicBuilder {
    id: Option<String>,
    data_center_id: Option<String>,
    server_id: Option<String>,
    lan_id: i32,
    internet_access: bool,
    ip: Option<String>,
    mac_address: Option<String>,
    dhcp_active: bool,
    gateway_ip: Option<String>,
    state: Option<ProvisioningState>,
    firewall: Option<Firewall>,
}

impl NicBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn data_center_id(mut self, data_center_id: impl Into<String>) -> Self {
        self.data_center_id = Some(data_center_id.into());
        self
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = Some(server_id.into());
        self
    }

    pub fn lan_id(mut self, lan_id: i32) -> Self {
        self.lan_id = lan_id;
        self
    }

    pub fn internet_access(mut self, internet_access: bool) -> Self {
        self.internet_access = internet_access;
        self
    }

    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn mac_address(mut self, mac_address: impl Into<String>) -> Self {
        self.mac_address = Some(mac_address.into());
        self
    }

    pub fn dhcp_active(mut self, dhcp_active: bool) -> Self {
        self.dhcp_active = dhcp_active;
        self
    }

    pub fn gateway_ip(mut self, gateway_ip: impl Into<String>) -> Self {
        self.gateway_ip = Some(gateway_ip.into());
        self
    }

    pub fn state(mut self, state: ProvisioningState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn firewall(mut self, firewall: Firewall) -> Self {
        self.firewall = Some(firewall);
        self
    }

    pub fn build(self) -> DomainResult<Nic> {
        Ok(Nic {
            id: require_id("Nic", self.id)?,
            data_center_id: self.data_center_id,
            server_id: self.server_id,
            lan_id: self.lan_id,
            internet_access: self.internet_access,
            ip: self.ip,
            mac_address: self.mac_address,
            dhcp_active: self.dhcp_active,
            gateway_ip: self.gateway_ip,
            state: self.state,
            firewall: self.firewall,
        })
    }
}

impl TryFrom<NicBuilder> for Nic {
    type Error = DomainError;

    fn try_from(builder: NicBuilder) -> DomainResult<Self> {
        builder.build()
    }
}
