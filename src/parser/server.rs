// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server Response Parsers
//!
//! Maps the ProfitBricks `getServer` and `getAllServers` SOAP responses onto
//! [`Server`] values.
//!
//! # Document shape
//!
//! ```text
//! <return>                         one server record
//!   <serverId/> <cores/> ...       server fields
//!   <connectedStorages>            one storage record (repeated)
//!     <storageId/> <size/> ...
//!   </connectedStorages>
//!   <nics>                         one nic record (repeated)
//!     <nicId/> <lanId/> ...
//!     <firewall>                   zero or one
//!       <firewallId/> <active/> ...
//!     </firewall>
//!   </nics>
//! </return>
//! ```
//!
//! Records are kept on a stack of builder frames, each remembering the depth
//! it was opened at. An element ending one level below the top frame is a
//! field of that frame; an element ending at the frame's own depth closes the
//! frame and hands the built value to its parent. Anything deeper sits inside
//! an element this parser does not know and is skipped, as are unknown
//! fields.

use std::io::BufRead;
use std::mem;
use tracing::{debug, trace};

use super::decode::{decode_bool, decode_date, decode_enum, decode_f32, decode_i32};
use super::sax::{parse_with, ResponseHandler};
use super::DocumentParser;
use crate::config::ParserConfig;
use crate::date::DateCodec;
use crate::domain::{
    AvailabilityZone, BusType, FirewallBuilder, NicBuilder, OsType, ProvisioningState, Server,
    ServerBuilder, ServerStatus, StorageBuilder,
};
use crate::errors::{ParseError, ParseResult};

const STORAGE_ELEMENT: &str = "connectedStorages";
const NIC_ELEMENT: &str = "nics";
const FIREWALL_ELEMENT: &str = "firewall";

/// Builder being filled in for the innermost open record
#[derive(Debug)]
enum Frame {
    Server(ServerBuilder),
    Storage(StorageBuilder),
    Nic(NicBuilder),
    Firewall(FirewallBuilder),
}

impl Frame {
    fn kind(&self) -> &'static str {
        match self {
            Frame::Server(_) => "server",
            Frame::Storage(_) => "storage",
            Frame::Nic(_) => "nic",
            Frame::Firewall(_) => "firewall",
        }
    }
}

/// Single-use handler collecting every server record in one document
pub struct ServerRecordHandler {
    record_element: String,
    codec: &'static dyn DateCodec,
    depth: usize,
    stack: Vec<(usize, Frame)>,
    servers: Vec<Server>,
}

impl ServerRecordHandler {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            record_element: config.record_element.clone(),
            codec: config.date_codec(),
            depth: 0,
            stack: Vec::new(),
            servers: Vec::new(),
        }
    }

    /// Frame that `name` opens, given the frame it appears directly under
    fn child_frame(&self, name: &str) -> Option<Frame> {
        match self.stack.last() {
            None if name == self.record_element => Some(Frame::Server(ServerBuilder::default())),
            Some((depth, frame)) if *depth + 1 == self.depth => match (frame, name) {
                (Frame::Server(_), STORAGE_ELEMENT) => {
                    Some(Frame::Storage(StorageBuilder::default()))
                }
                (Frame::Server(_), NIC_ELEMENT) => Some(Frame::Nic(NicBuilder::default())),
                (Frame::Nic(_), FIREWALL_ELEMENT) => {
                    Some(Frame::Firewall(FirewallBuilder::default()))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Build the top frame and attach it to its parent
    fn close_frame(&mut self) -> ParseResult<()> {
        let Some((_, frame)) = self.stack.pop() else {
            return Ok(());
        };

        match (frame, self.stack.last_mut()) {
            (Frame::Server(builder), _) => {
                let server = builder.build()?;
                debug!(
                    server_id = server.id(),
                    storages = server.storages().len(),
                    nics = server.nics().len(),
                    "Parsed server record"
                );
                self.servers.push(server);
            }
            (Frame::Storage(builder), Some((_, Frame::Server(server)))) => {
                let storage = builder.build()?;
                *server = mem::take(server).storage(storage);
            }
            (Frame::Nic(builder), Some((_, Frame::Server(server)))) => {
                let nic = builder.build()?;
                *server = mem::take(server).nic(nic);
            }
            (Frame::Firewall(builder), Some((_, Frame::Nic(nic)))) => {
                let firewall = builder.build()?;
                *nic = mem::take(nic).firewall(firewall);
            }
            (frame, _) => trace!(frame = frame.kind(), "Dropping record without parent"),
        }

        Ok(())
    }

    /// Apply one field to the top frame; returns false for unknown elements
    fn apply_field(&mut self, name: &str, text: &str) -> ParseResult<bool> {
        let codec = self.codec;
        match self.stack.last_mut() {
            Some((_, Frame::Server(builder))) => server_field(builder, name, text, codec),
            Some((_, Frame::Storage(builder))) => storage_field(builder, name, text),
            Some((_, Frame::Nic(builder))) => nic_field(builder, name, text),
            Some((_, Frame::Firewall(builder))) => firewall_field(builder, name, text),
            None => Ok(false),
        }
    }
}

impl ResponseHandler for ServerRecordHandler {
    type Output = Vec<Server>;

    fn start_element(&mut self, name: &str) -> ParseResult<()> {
        self.depth += 1;
        if let Some(frame) = self.child_frame(name) {
            trace!(element = name, frame = frame.kind(), depth = self.depth, "Opening record");
            self.stack.push((self.depth, frame));
        }
        Ok(())
    }

    fn end_element(&mut self, name: &str, text: &str) -> ParseResult<()> {
        let top_depth = self.stack.last().map(|(depth, _)| *depth);

        match top_depth {
            Some(depth) if depth == self.depth => self.close_frame()?,
            Some(depth) if depth + 1 == self.depth => {
                if text.is_empty() {
                    trace!(element = name, "Empty element left at default");
                } else if !self.apply_field(name, text)? {
                    trace!(element = name, "Ignoring unknown element");
                }
            }
            _ => {}
        }

        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn finish(self) -> ParseResult<Self::Output> {
        Ok(self.servers)
    }
}

fn server_field(
    builder: &mut ServerBuilder,
    name: &str,
    text: &str,
    codec: &dyn DateCodec,
) -> ParseResult<bool> {
    let b = mem::take(builder);
    *builder = match name {
        "serverId" => b.id(text),
        "serverName" => b.name(text),
        "cores" => b.cores(decode_i32(name, text)?),
        "ram" => b.ram(decode_i32(name, text)?),
        "internetAccess" => b.has_internet_access(decode_bool(name, text)?),
        "provisioningState" => b.state(provisioning_state(name, text)),
        "virtualMachineState" => b.status(decode_enum(
            name,
            text,
            ServerStatus::from_str,
            ServerStatus::Unrecognized,
        )),
        "creationTime" => b.creation_time(decode_date(name, text, codec)?),
        "lastModificationTime" => b.last_modification_time(decode_date(name, text, codec)?),
        "osType" => b.os_type(decode_enum(name, text, OsType::from_str, OsType::Unrecognized)),
        "availabilityZone" => b.availability_zone(decode_enum(
            name,
            text,
            AvailabilityZone::from_str,
            AvailabilityZone::Unrecognized,
        )),
        "cpuHotPlug" => b.cpu_hot_plug(decode_bool(name, text)?),
        "ramHotPlug" => b.ram_hot_plug(decode_bool(name, text)?),
        "nicHotPlug" => b.nic_hot_plug(decode_bool(name, text)?),
        "nicHotUnPlug" => b.nic_hot_unplug(decode_bool(name, text)?),
        "discVirtioHotPlug" => b.disc_virtio_hot_plug(decode_bool(name, text)?),
        "discVirtioHotUnPlug" => b.disc_virtio_hot_unplug(decode_bool(name, text)?),
        _ => {
            *builder = b;
            return Ok(false);
        }
    };
    Ok(true)
}

fn storage_field(builder: &mut StorageBuilder, name: &str, text: &str) -> ParseResult<bool> {
    let b = mem::take(builder);
    *builder = match name {
        "storageId" => b.id(text),
        "storageName" => b.name(text),
        "bootDevice" => b.boot_device(decode_bool(name, text)?),
        "busType" => b.bus_type(decode_enum(name, text, BusType::from_str, BusType::Unrecognized)),
        "deviceNumber" => b.device_number(decode_i32(name, text)?),
        "size" => b.size(decode_f32(name, text)?),
        _ => {
            *builder = b;
            return Ok(false);
        }
    };
    Ok(true)
}

fn nic_field(builder: &mut NicBuilder, name: &str, text: &str) -> ParseResult<bool> {
    let b = mem::take(builder);
    *builder = match name {
        "nicId" => b.id(text),
        "dataCenterId" => b.data_center_id(text),
        "serverId" => b.server_id(text),
        "lanId" => b.lan_id(decode_i32(name, text)?),
        "internetAccess" => b.internet_access(decode_bool(name, text)?),
        "ips" => b.ip(text),
        "macAddress" => b.mac_address(text),
        "dhcpActive" => b.dhcp_active(decode_bool(name, text)?),
        "gatewayIp" => b.gateway_ip(text),
        "provisioningState" => b.state(provisioning_state(name, text)),
        _ => {
            *builder = b;
            return Ok(false);
        }
    };
    Ok(true)
}

fn firewall_field(builder: &mut FirewallBuilder, name: &str, text: &str) -> ParseResult<bool> {
    let b = mem::take(builder);
    *builder = match name {
        "firewallId" => b.id(text),
        "nicId" => b.nic_id(text),
        "active" => b.active(decode_bool(name, text)?),
        "provisioningState" => b.state(provisioning_state(name, text)),
        _ => {
            *builder = b;
            return Ok(false);
        }
    };
    Ok(true)
}

fn provisioning_state(name: &str, text: &str) -> ProvisioningState {
    decode_enum(
        name,
        text,
        ProvisioningState::from_str,
        ProvisioningState::Unrecognized,
    )
}

/// Parser for the `getServer` response
///
/// Produces the first server record in the document; a document without one
/// fails with [`ParseError::MissingElement`].
#[derive(Debug, Clone, Default)]
pub struct ServerInfoResponseParser {
    config: ParserConfig,
}

impl ServerInfoResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl DocumentParser<Server> for ServerInfoResponseParser {
    fn parse_reader<R: BufRead>(&self, input: R) -> ParseResult<Server> {
        let servers = parse_with(input, ServerRecordHandler::new(&self.config))?;
        if servers.len() > 1 {
            debug!(records = servers.len(), "Server info response held several records, using the first");
        }
        servers
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::MissingElement(self.config.record_element.clone()))
    }
}

/// Parser for the `getAllServers` response
///
/// Produces one server per record element, in document order. A response
/// without records yields an empty list.
#[derive(Debug, Clone, Default)]
pub struct ServerListResponseParser {
    config: ParserConfig,
}

impl ServerListResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl DocumentParser<Vec<Server>> for ServerListResponseParser {
    fn parse_reader<R: BufRead>(&self, input: R) -> ParseResult<Vec<Server>> {
        let servers = parse_with(input, ServerRecordHandler::new(&self.config))?;
        debug!(records = servers.len(), "Parsed server list response");
        Ok(servers)
    }
}
