// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for server record parsing
//!
//! Generates server records, renders them as provider XML and checks the
//! parser hands back exactly the value the document was rendered from.

use cim_infrastructure_profitbricks::{
    DocumentParser, Firewall, Nic, Server, ServerInfoResponseParser, ServerListResponseParser,
    Storage,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct StorageSample {
    id: String,
    device_number: i32,
    size: f32,
    boot_device: bool,
}

#[derive(Debug, Clone)]
struct NicSample {
    id: String,
    lan_id: i32,
    dhcp_active: bool,
    firewall: Option<(String, bool)>,
}

#[derive(Debug, Clone)]
struct ServerSample {
    id: String,
    name: String,
    cores: i32,
    ram: i32,
    cpu_hot_plug: bool,
    storages: Vec<StorageSample>,
    nics: Vec<NicSample>,
}

fn id() -> impl Strategy<Value = String> {
    "[a-z0-9]{8}-[a-z0-9]{4}"
}

fn storage_sample() -> impl Strategy<Value = StorageSample> {
    (id(), 0i32..16, 0.0f32..4096.0, any::<bool>()).prop_map(
        |(id, device_number, size, boot_device)| StorageSample {
            id,
            device_number,
            size,
            boot_device,
        },
    )
}

fn nic_sample() -> impl Strategy<Value = NicSample> {
    (
        id(),
        1i32..100,
        any::<bool>(),
        proptest::option::of((id(), any::<bool>())),
    )
        .prop_map(|(id, lan_id, dhcp_active, firewall)| NicSample {
            id,
            lan_id,
            dhcp_active,
            firewall,
        })
}

fn server_sample() -> impl Strategy<Value = ServerSample> {
    (
        id(),
        "[a-zA-Z][a-zA-Z0-9_.-]{0,19}",
        1i32..64,
        256i32..262_144,
        any::<bool>(),
        proptest::collection::vec(storage_sample(), 0..4),
        proptest::collection::vec(nic_sample(), 0..4),
    )
        .prop_map(|(id, name, cores, ram, cpu_hot_plug, storages, nics)| ServerSample {
            id,
            name,
            cores,
            ram,
            cpu_hot_plug,
            storages,
            nics,
        })
}

fn render(sample: &ServerSample) -> String {
    let mut xml = format!(
        "<return><serverId>{}</serverId><serverName>{}</serverName><cores>{}</cores><ram>{}</ram><cpuHotPlug>{}</cpuHotPlug>",
        sample.id, sample.name, sample.cores, sample.ram, sample.cpu_hot_plug
    );
    for storage in &sample.storages {
        xml.push_str(&format!(
            "<connectedStorages><storageId>{}</storageId><deviceNumber>{}</deviceNumber><size>{}</size><bootDevice>{}</bootDevice></connectedStorages>",
            storage.id, storage.device_number, storage.size, storage.boot_device
        ));
    }
    for nic in &sample.nics {
        xml.push_str(&format!(
            "<nics><nicId>{}</nicId><serverId>{}</serverId><lanId>{}</lanId><dhcpActive>{}</dhcpActive>",
            nic.id, sample.id, nic.lan_id, nic.dhcp_active
        ));
        if let Some((firewall_id, active)) = &nic.firewall {
            xml.push_str(&format!(
                "<firewall><firewallId>{}</firewallId><nicId>{}</nicId><active>{}</active></firewall>",
                firewall_id, nic.id, active
            ));
        }
        xml.push_str("</nics>");
    }
    xml.push_str("</return>");
    xml
}

fn expected(sample: &ServerSample) -> Server {
    let storages = sample.storages.iter().map(|s| {
        Storage::builder()
            .id(&s.id)
            .device_number(s.device_number)
            .size(s.size)
            .boot_device(s.boot_device)
            .build()
            .unwrap()
    });
    let nics = sample.nics.iter().map(|n| {
        let mut builder = Nic::builder()
            .id(&n.id)
            .server_id(&sample.id)
            .lan_id(n.lan_id)
            .dhcp_active(n.dhcp_active);
        if let Some((firewall_id, active)) = &n.firewall {
            builder = builder.firewall(
                Firewall::builder()
                    .id(firewall_id)
                    .nic_id(&n.id)
                    .active(*active)
                    .build()
                    .unwrap(),
            );
        }
        builder.build().unwrap()
    });

    Server::builder()
        .id(&sample.id)
        .name(&sample.name)
        .cores(sample.cores)
        .ram(sample.ram)
        .cpu_hot_plug(sample.cpu_hot_plug)
        .storages(storages)
        .nics(nics)
        .build()
        .unwrap()
}

proptest! {
    /// Rendering then parsing yields the value the document was rendered from
    #[test]
    fn prop_parse_matches_rendered_record(sample in server_sample()) {
        let parsed = ServerInfoResponseParser::new().parse_str(&render(&sample)).unwrap();
        prop_assert_eq!(parsed, expected(&sample));
    }

    /// Parsing the same document twice gives equal values
    #[test]
    fn prop_parsing_is_deterministic(sample in server_sample()) {
        let xml = render(&sample);
        let parser = ServerInfoResponseParser::new();
        prop_assert_eq!(parser.parse_str(&xml).unwrap(), parser.parse_str(&xml).unwrap());
    }

    /// Every record of a list response comes back, in order
    #[test]
    fn prop_list_preserves_record_order(samples in proptest::collection::vec(server_sample(), 0..5)) {
        let xml = format!(
            "<getAllServersResponse>{}</getAllServersResponse>",
            samples.iter().map(render).collect::<String>()
        );
        let parsed = ServerListResponseParser::new().parse_str(&xml).unwrap();
        let want: Vec<Server> = samples.iter().map(expected).collect();
        prop_assert_eq!(parsed, want);
    }
}
