// Copyright (c) 2025 - Cowboy AI, Inc.
//! ProfitBricks Domain Models
//!
//! Immutable value objects produced by the response parsers. Each entity is
//! built through a builder that acts as the mutable draft while a document
//! streams in; `build()` checks the only structural invariant (a non-empty
//! id) and everything else falls back to defaults.
//!
//! # Entities
//!
//! - [`Server`] - virtual server composing storages and nics by value
//! - [`Storage`] - connected volume
//! - [`Nic`] - network interface with an optional [`Firewall`]
//!
//! # Enumerations
//!
//! - [`ProvisioningState`], [`ServerStatus`], [`OsType`],
//!   [`AvailabilityZone`], [`BusType`]

pub mod firewall;
pub mod invariants;
pub mod nic;
pub mod server;
pub mod storage;
pub mod types;

pub use firewall::{Firewall, FirewallBuilder};
pub use invariants::{DomainError, DomainResult};
pub use nic::{Nic, NicBuilder};
pub use server::{Server, ServerBuilder, ServerStatus};
pub use storage::{BusType, Storage, StorageBuilder};
pub use types::{AvailabilityZone, OsType, ProvisioningState};
