// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-infrastructure-profitbricks
//!
//! Provider response documents and the domain values they must parse into.
//! All ids and timestamps are fixed constants so tests are reproducible.

#![allow(dead_code)]

use chrono::{DateTime, Utc};

use cim_infrastructure_profitbricks::{
    AvailabilityZone, BusType, DateCodec, Firewall, Iso8601DateCodec, Nic, OsType,
    ProvisioningState, Server, ServerStatus, Storage,
};

/// `getServer` response for one server with one storage and one nic
pub const SERVER_XML: &str = include_str!("server/server.xml");

/// `getAllServers` response with two servers
pub const SERVERS_XML: &str = include_str!("server/servers.xml");

pub const SERVER_ID: &str = "qwertyui-qwer-qwer-qwer-qwertyyuiiop";
pub const SECOND_SERVER_ID: &str = "asdfghjk-asdf-asdf-asdf-asdfghjklkjl";
pub const DATA_CENTER_ID: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
pub const STORAGE_ID: &str = "qswdefrg-qaws-qaws-defe-rgrgdsvcxbrh";
pub const NIC_ID: &str = "qwqwqwqw-wewe-erer-rtrt-tytytytytyty";
pub const FIREWALL_ID: &str = "wqwqwqwq-ewew-rere-trtr-ytytytytytyt";

/// Parse a timestamp the same way the parser does
pub fn iso8601(text: &str) -> DateTime<Utc> {
    Iso8601DateCodec
        .to_date(text)
        .expect("Invalid timestamp in test fixture")
}

/// The value `SERVER_XML` must parse into
pub fn expected_server() -> Server {
    Server::builder()
        .id(SERVER_ID)
        .name("facebook-node")
        .cores(4)
        .ram(4096)
        .has_internet_access(true)
        .state(ProvisioningState::Available)
        .status(ServerStatus::Running)
        .creation_time(iso8601("2014-12-04T07:09:23.138Z"))
        .last_modification_time(iso8601("2014-12-12T03:08:35.629Z"))
        .os_type(OsType::Linux)
        .availability_zone(AvailabilityZone::Auto)
        .cpu_hot_plug(true)
        .ram_hot_plug(true)
        .nic_hot_plug(true)
        .nic_hot_unplug(true)
        .disc_virtio_hot_plug(true)
        .disc_virtio_hot_unplug(true)
        .storages(vec![Storage::builder()
            .boot_device(true)
            .bus_type(BusType::Virtio)
            .device_number(1)
            .size(40.0)
            .id(STORAGE_ID)
            .name("facebook-storage")
            .build()
            .expect("Invalid storage fixture")])
        .nics(vec![Nic::builder()
            .data_center_id(DATA_CENTER_ID)
            .id(NIC_ID)
            .lan_id(1)
            .internet_access(true)
            .server_id(SERVER_ID)
            .ip("173.252.120.6")
            .mac_address("02:01:09:cd:f0:b0")
            .firewall(
                Firewall::builder()
                    .active(false)
                    .id(FIREWALL_ID)
                    .nic_id(NIC_ID)
                    .state(ProvisioningState::Available)
                    .build()
                    .expect("Invalid firewall fixture"),
            )
            .dhcp_active(true)
            .gateway_ip("173.252.120.1")
            .state(ProvisioningState::Available)
            .build()
            .expect("Invalid nic fixture")])
        .build()
        .expect("Invalid server fixture")
}

/// Wrap record fields in the same envelope the provider uses
pub fn server_document(fields: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/">
    <S:Body>
        <ns2:getServerResponse xmlns:ns2="http://ws.api.profitbricks.com/">
            <return>{fields}</return>
        </ns2:getServerResponse>
    </S:Body>
</S:Envelope>"#
    )
}
