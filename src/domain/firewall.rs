// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall attached to a network interface

use serde::{Deserialize, Serialize};

use super::invariants::{require_id, DomainError, DomainResult};
use super::ProvisioningState;

/// Firewall value object
///
/// Zero or one per [`Nic`](super::Nic). `nic_id` is a back-reference used for
/// cross-checking only; ownership flows from the nic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FirewallBuilder")]
pub struct Firewall {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    nic_id: Option<String>,
    active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ProvisioningState>,
}

impl Firewall {
    pub fn builder() -> FirewallBuilder {
        FirewallBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nic_id(&self) -> Option<&str> {
        self.nic_id.as_deref()
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> Option<ProvisioningState> {
        self.state
    }
}

/// Builder for [`Firewall`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirewallBuilder {
    id: Option<String>,
    nic_id: Option<String>,
    active: bool,
    state: Option<ProvisioningState>,
}

impl FirewallBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn nic_id(mut self, nic_id: impl Into<String>) -> Self {
        self.nic_id = Some(nic_id.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn state(mut self, state: ProvisioningState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn build(self) -> DomainResult<Firewall> {
        Ok(Firewall {
            id: require_id("Firewall", self.id)?,
            nic_id: self.nic_id,
            active: self.active,
            state: self.state,
        })
    }
}

impl TryFrom<FirewallBuilder> for Firewall {
    type Error = DomainError;

    fn try_from(builder: FirewallBuilder) -> DomainResult<Self> {
        builder.build()
    }
}
