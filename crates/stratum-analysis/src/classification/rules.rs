//! Built-in rule tables.
//!
//! Every pattern is a bare regex fragment. The registry anchors it and makes
//! it case-insensitive, so each one must match a whole token.

use stratum_core::types::{
    AdapterType, AppType, ComponentType, CompositionType, DirectionType, DomainType, GlobalType,
    LayerType, PortType, ScopeType,
};

use ComponentType as C;
use DirectionType as D;
use LayerType as L;

/// One rule row: a component type, where it applies, and its patterns.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec<'a> {
    pub component_type: ComponentType,
    pub layer: LayerType,
    pub direction: DirectionType,
    pub patterns: &'a [&'a str],
}

impl<'a> RuleSpec<'a> {
    pub const fn new(
        component_type: ComponentType,
        layer: LayerType,
        direction: DirectionType,
        patterns: &'a [&'a str],
    ) -> Self {
        Self {
            component_type,
            layer,
            direction,
            patterns,
        }
    }
}

/// Lower sorts first. The layer-agnostic fallback sorts after every real layer.
pub const fn layer_weight(layer: LayerType) -> u32 {
    match layer {
        LayerType::Domain => 10,
        LayerType::App => 20,
        LayerType::Ports => 30,
        LayerType::Adapters => 40,
        LayerType::Composition => 50,
        LayerType::Global => 90,
        LayerType::Undefined => 100,
    }
}

pub static SCOPE_MARKERS: &[(ScopeType, &[&str])] = &[
    (
        ScopeType::Root,
        &[
            "root",
            "composition_root",
            "main",
            "__main__",
            "wsgi",
            "asgi",
            "manage",
        ],
    ),
    (
        ScopeType::Shared,
        &[
            "shared",
            "shared_kernel",
            "kernel",
            "common",
            "core",
            "libs?",
            "seedwork",
            "building_blocks",
        ],
    ),
];

pub static LAYER_MARKERS: &[(LayerType, &[&str])] = &[
    (LayerType::Domain, &["domain", "domain_layer"]),
    (
        LayerType::App,
        &["app", "application", "app_layer", "application_layer"],
    ),
    (
        LayerType::Adapters,
        &["adapters?", "infrastructure", "infra", "adapter_layer"],
    ),
    (LayerType::Ports, &["ports?", "port_layer"]),
    (LayerType::Composition, &["composition"]),
    (LayerType::Global, &["global", "cross_cutting", "crosscutting"]),
];

pub static DIRECTION_MARKERS: &[(DirectionType, &[&str])] = &[
    (
        DirectionType::Driving,
        &[
            "driving", "inbound", "in", "primary", "drv", "input", "incoming",
        ],
    ),
    (
        DirectionType::Driven,
        &[
            "driven", "outbound", "out", "secondary", "dvn", "output", "outgoing",
        ],
    ),
];

/// Folder-token rules.
#[rustfmt::skip]
pub static STRUCTURAL_RULES: &[RuleSpec<'static>] = &[
    // Domain
    RuleSpec::new(C::Domain(DomainType::Aggregate), L::Domain, D::None, &["aggregates?", "aggregate_roots?"]),
    RuleSpec::new(C::Domain(DomainType::Entity), L::Domain, D::None, &["entit(y|ies)", "models?"]),
    RuleSpec::new(C::Domain(DomainType::ValueObject), L::Domain, D::None, &["value_objects?", "values?", "vos?"]),
    RuleSpec::new(C::Domain(DomainType::Event), L::Domain, D::None, &["events?", "domain_events?"]),
    RuleSpec::new(C::Domain(DomainType::Service), L::Domain, D::None, &["services?", "domain_services?"]),
    RuleSpec::new(C::Domain(DomainType::RepositoryInterface), L::Domain, D::None, &["repositor(y|ies)", "repos?"]),
    RuleSpec::new(C::Domain(DomainType::Specification), L::Domain, D::None, &["specifications?", "specs?", "policies", "rules"]),
    RuleSpec::new(C::Domain(DomainType::Factory), L::Domain, D::None, &["factor(y|ies)"]),
    RuleSpec::new(C::Domain(DomainType::Error), L::Domain, D::None, &["errors?", "exceptions?"]),
    // Application
    RuleSpec::new(C::App(AppType::UseCase), L::App, D::None, &["use_?cases?", "interactors?"]),
    RuleSpec::new(C::App(AppType::Command), L::App, D::None, &["commands?"]),
    RuleSpec::new(C::App(AppType::Query), L::App, D::None, &["quer(y|ies)"]),
    RuleSpec::new(C::App(AppType::Handler), L::App, D::None, &["handlers?"]),
    RuleSpec::new(C::App(AppType::EventHandler), L::App, D::None, &["event_handlers?", "subscribers?"]),
    RuleSpec::new(C::App(AppType::Service), L::App, D::None, &["services?", "app_services?", "application_services?"]),
    RuleSpec::new(C::App(AppType::Dto), L::App, D::None, &["dtos?", "schemas?"]),
    RuleSpec::new(C::App(AppType::Interface), L::App, D::None, &["interfaces?", "protocols?", "contracts?"]),
    // Adapters, driving side
    RuleSpec::new(C::Adapter(AdapterType::Controller), L::Adapters, D::Driving, &["controllers?", "api", "rest", "views?", "endpoints?"]),
    RuleSpec::new(C::Adapter(AdapterType::Cli), L::Adapters, D::Driving, &["cli", "console"]),
    RuleSpec::new(C::Adapter(AdapterType::Consumer), L::Adapters, D::Driving, &["consumers?", "workers?", "subscribers?"]),
    // Adapters, either side
    RuleSpec::new(C::Adapter(AdapterType::Dto), L::Adapters, D::Any, &["dtos?", "schemas?", "serializers?"]),
    RuleSpec::new(C::Adapter(AdapterType::Mapper), L::Adapters, D::Any, &["mappers?", "converters?", "translators?"]),
    // Adapters, driven side
    RuleSpec::new(C::Adapter(AdapterType::Repository), L::Adapters, D::Driven, &["repositor(y|ies)", "repos?", "persistence", "dao"]),
    RuleSpec::new(C::Adapter(AdapterType::Gateway), L::Adapters, D::Driven, &["gateways?"]),
    RuleSpec::new(C::Adapter(AdapterType::Client), L::Adapters, D::Driven, &["clients?"]),
    RuleSpec::new(C::Adapter(AdapterType::Acl), L::Adapters, D::Driven, &["acls?", "anti_corruption(_layer)?"]),
    RuleSpec::new(C::Adapter(AdapterType::Publisher), L::Adapters, D::Driven, &["publishers?", "producers?", "emitters?"]),
    // Ports, driving side
    RuleSpec::new(C::Port(PortType::Facade), L::Ports, D::Driving, &["facades?"]),
    RuleSpec::new(C::Port(PortType::Router), L::Ports, D::Driving, &["routers?", "routes?"]),
    RuleSpec::new(C::Port(PortType::Listener), L::Ports, D::Driving, &["listeners?"]),
    // Ports, driven side
    RuleSpec::new(C::Port(PortType::Database), L::Ports, D::Driven, &["databases?", "db", "orm", "sql"]),
    RuleSpec::new(C::Port(PortType::Broker), L::Ports, D::Driven, &["brokers?", "messaging", "queues?", "kafka", "rabbitmq"]),
    RuleSpec::new(C::Port(PortType::Storage), L::Ports, D::Driven, &["storages?", "s3", "blobs?"]),
    RuleSpec::new(C::Port(PortType::HttpClient), L::Ports, D::Driven, &["http", "http_clients?"]),
    RuleSpec::new(C::Port(PortType::Cache), L::Ports, D::Driven, &["cach(e|es|ing)", "redis"]),
    // Ports and adapters, side not given by any folder
    RuleSpec::new(C::Adapter(AdapterType::Controller), L::Adapters, D::None, &["controllers?", "api", "rest", "views?", "endpoints?"]),
    RuleSpec::new(C::Adapter(AdapterType::Cli), L::Adapters, D::None, &["cli", "console"]),
    RuleSpec::new(C::Adapter(AdapterType::Consumer), L::Adapters, D::None, &["consumers?", "workers?"]),
    RuleSpec::new(C::Adapter(AdapterType::Repository), L::Adapters, D::None, &["repositor(y|ies)", "repos?", "persistence", "dao"]),
    RuleSpec::new(C::Adapter(AdapterType::Gateway), L::Adapters, D::None, &["gateways?"]),
    RuleSpec::new(C::Adapter(AdapterType::Client), L::Adapters, D::None, &["clients?"]),
    RuleSpec::new(C::Adapter(AdapterType::Publisher), L::Adapters, D::None, &["publishers?", "producers?"]),
    RuleSpec::new(C::Port(PortType::Facade), L::Ports, D::None, &["facades?"]),
    RuleSpec::new(C::Port(PortType::Router), L::Ports, D::None, &["routers?", "routes?"]),
    RuleSpec::new(C::Port(PortType::Listener), L::Ports, D::None, &["listeners?"]),
    RuleSpec::new(C::Port(PortType::Database), L::Ports, D::None, &["databases?", "db"]),
    RuleSpec::new(C::Port(PortType::Cache), L::Ports, D::None, &["cach(e|es|ing)"]),
    // Composition
    RuleSpec::new(C::Composition(CompositionType::Container), L::Composition, D::None, &["containers?", "di", "ioc", "providers?"]),
    RuleSpec::new(C::Composition(CompositionType::Entrypoint), L::Composition, D::None, &["entrypoints?", "cmd", "bin"]),
    RuleSpec::new(C::Composition(CompositionType::Settings), L::Composition, D::None, &["settings", "config(s|uration)?"]),
    RuleSpec::new(C::Composition(CompositionType::Wiring), L::Composition, D::None, &["wiring", "bootstrap"]),
    // Layer-agnostic fallback
    RuleSpec::new(C::Global(GlobalType::Utils), L::Global, D::Any, &["utils?", "utilities", "helpers?", "tools"]),
    RuleSpec::new(C::Global(GlobalType::Constants), L::Global, D::Any, &["constants?", "consts?", "enums?"]),
    RuleSpec::new(C::Global(GlobalType::Exceptions), L::Global, D::Any, &["exceptions?", "errors?"]),
    RuleSpec::new(C::Global(GlobalType::Types), L::Global, D::Any, &["types?", "typing"]),
    RuleSpec::new(C::Global(GlobalType::Logging), L::Global, D::Any, &["logging", "logs?", "loggers?"]),
];

/// Filename-stem rules.
#[rustfmt::skip]
pub static NAMING_RULES: &[RuleSpec<'static>] = &[
    // Domain
    RuleSpec::new(C::Domain(DomainType::Aggregate), L::Domain, D::None, &[".+_aggregate", "aggregate"]),
    RuleSpec::new(C::Domain(DomainType::Entity), L::Domain, D::None, &[".+_entity", "entity"]),
    RuleSpec::new(C::Domain(DomainType::ValueObject), L::Domain, D::None, &[".+_value_object", ".+_vo", "value_objects?"]),
    RuleSpec::new(C::Domain(DomainType::Event), L::Domain, D::None, &[".+_event", "events?"]),
    RuleSpec::new(C::Domain(DomainType::Service), L::Domain, D::None, &[".+_domain_service"]),
    RuleSpec::new(C::Domain(DomainType::RepositoryInterface), L::Domain, D::None, &[".+_repository_(interface|protocol|port)", "i_.+_repository"]),
    RuleSpec::new(C::Domain(DomainType::Specification), L::Domain, D::None, &[".+_spec(ification)?"]),
    RuleSpec::new(C::Domain(DomainType::Factory), L::Domain, D::None, &[".+_factory", "factory"]),
    RuleSpec::new(C::Domain(DomainType::Error), L::Domain, D::None, &[".+_(error|exception)s?"]),
    // Application
    RuleSpec::new(
        C::App(AppType::UseCase),
        L::App,
        D::None,
        &[".+_use_?case", "use_?cases?", "(create|update|delete|get|list|register|cancel|place|process)_.+"],
    ),
    RuleSpec::new(C::App(AppType::Command), L::App, D::None, &[".+_command", "commands?"]),
    RuleSpec::new(C::App(AppType::Query), L::App, D::None, &[".+_query", "quer(y|ies)"]),
    RuleSpec::new(C::App(AppType::EventHandler), L::App, D::None, &[".+_event_handler"]),
    RuleSpec::new(C::App(AppType::Handler), L::App, D::None, &[".+_handler", "handlers?"]),
    RuleSpec::new(C::App(AppType::Service), L::App, D::None, &[".+_service", "services?"]),
    RuleSpec::new(C::App(AppType::Dto), L::App, D::None, &[".+_dto", "dtos?"]),
    RuleSpec::new(C::App(AppType::Interface), L::App, D::None, &[".+_interface", "interfaces?"]),
    // Adapters
    RuleSpec::new(C::Adapter(AdapterType::Controller), L::Adapters, D::Driving, &[".+_controller", ".+_view", ".+_api"]),
    RuleSpec::new(C::Adapter(AdapterType::Cli), L::Adapters, D::Driving, &["cli", ".+_cli"]),
    RuleSpec::new(C::Adapter(AdapterType::Consumer), L::Adapters, D::Driving, &[".+_consumer", ".+_worker"]),
    RuleSpec::new(C::Adapter(AdapterType::Dto), L::Adapters, D::Any, &[".+_(dto|schema|serializer)"]),
    RuleSpec::new(C::Adapter(AdapterType::Mapper), L::Adapters, D::Any, &[".+_(mapper|converter|translator)"]),
    RuleSpec::new(C::Adapter(AdapterType::Repository), L::Adapters, D::Driven, &[".+_repository", ".+_repo", ".+_dao"]),
    RuleSpec::new(C::Adapter(AdapterType::Gateway), L::Adapters, D::Driven, &[".+_gateway"]),
    RuleSpec::new(C::Adapter(AdapterType::Client), L::Adapters, D::Driven, &[".+_client"]),
    RuleSpec::new(C::Adapter(AdapterType::Acl), L::Adapters, D::Driven, &[".+_acl", ".+_anti_corruption"]),
    RuleSpec::new(C::Adapter(AdapterType::Publisher), L::Adapters, D::Driven, &[".+_(publisher|producer)"]),
    // Ports
    RuleSpec::new(C::Port(PortType::Facade), L::Ports, D::Driving, &[".+_facade", "facade"]),
    RuleSpec::new(C::Port(PortType::Router), L::Ports, D::Driving, &[".+_router", "router", "routes"]),
    RuleSpec::new(C::Port(PortType::Listener), L::Ports, D::Driving, &[".+_listener", "listener"]),
    RuleSpec::new(C::Port(PortType::Database), L::Ports, D::Driven, &[".+_(db|database)", "database", "db"]),
    RuleSpec::new(C::Port(PortType::Broker), L::Ports, D::Driven, &[".+_broker", "broker"]),
    RuleSpec::new(C::Port(PortType::Storage), L::Ports, D::Driven, &[".+_storage", "storage"]),
    RuleSpec::new(C::Port(PortType::HttpClient), L::Ports, D::Driven, &[".+_http_client", "http_client"]),
    RuleSpec::new(C::Port(PortType::Cache), L::Ports, D::Driven, &[".+_cache", "cache"]),
    // Ports and adapters, side not given by any folder
    RuleSpec::new(C::Adapter(AdapterType::Controller), L::Adapters, D::None, &[".+_controller", ".+_view", ".+_api"]),
    RuleSpec::new(C::Adapter(AdapterType::Repository), L::Adapters, D::None, &[".+_repository", ".+_repo", ".+_dao"]),
    RuleSpec::new(C::Adapter(AdapterType::Gateway), L::Adapters, D::None, &[".+_gateway"]),
    RuleSpec::new(C::Adapter(AdapterType::Client), L::Adapters, D::None, &[".+_client"]),
    RuleSpec::new(C::Port(PortType::Facade), L::Ports, D::None, &[".+_facade", "facade"]),
    RuleSpec::new(C::Port(PortType::Router), L::Ports, D::None, &[".+_router", "router", "routes"]),
    RuleSpec::new(C::Port(PortType::Listener), L::Ports, D::None, &[".+_listener", "listener"]),
    // Composition
    RuleSpec::new(C::Composition(CompositionType::Container), L::Composition, D::None, &[".+_container", "container", "di"]),
    RuleSpec::new(C::Composition(CompositionType::Entrypoint), L::Composition, D::None, &["main", "__main__", "wsgi", "asgi", "manage", "entrypoint"]),
    RuleSpec::new(C::Composition(CompositionType::Settings), L::Composition, D::None, &["settings", "config", ".+_settings", ".+_config"]),
    RuleSpec::new(C::Composition(CompositionType::Wiring), L::Composition, D::None, &["wiring", "bootstrap", ".+_wiring"]),
    // Layer-agnostic fallback
    RuleSpec::new(C::Global(GlobalType::Utils), L::Global, D::Any, &["utils?", "helpers?", ".+_utils?", ".+_helpers?"]),
    RuleSpec::new(C::Global(GlobalType::Constants), L::Global, D::Any, &["constants?", "consts?", ".+_constants"]),
    RuleSpec::new(C::Global(GlobalType::Exceptions), L::Global, D::Any, &["exceptions?", "errors?"]),
    RuleSpec::new(C::Global(GlobalType::Types), L::Global, D::Any, &["types?", "typings?", ".+_types"]),
    RuleSpec::new(C::Global(GlobalType::Logging), L::Global, D::Any, &["logging", "logger", "log", ".+_logger"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_layers_sort_last() {
        for layer in LayerType::ALL {
            if !matches!(layer, LayerType::Global | LayerType::Undefined) {
                assert!(layer_weight(layer) < layer_weight(LayerType::Global));
            }
        }
    }

    #[test]
    fn rules_sit_in_their_own_layer() {
        for spec in STRUCTURAL_RULES.iter().chain(NAMING_RULES) {
            assert_eq!(spec.component_type.layer(), spec.layer, "{:?}", spec.component_type);
            assert!(!spec.patterns.is_empty());
        }
    }

    fn marker_words() -> Vec<&'static str> {
        let scope = SCOPE_MARKERS.iter().flat_map(|(_, words)| words.iter());
        let layer = LAYER_MARKERS.iter().flat_map(|(_, words)| words.iter());
        let direction = DIRECTION_MARKERS.iter().flat_map(|(_, words)| words.iter());
        scope
            .chain(layer)
            .chain(direction)
            .map(|w| w.trim_end_matches('?'))
            .collect()
    }

    #[test]
    fn marker_words_are_unique_across_tables() {
        let words = marker_words();
        let unique: std::collections::BTreeSet<_> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn folder_rules_never_match_a_marker() {
        // Markers are stripped before the folder scan.
        let words = marker_words();
        for spec in STRUCTURAL_RULES {
            for source in spec.patterns {
                let pattern = crate::classification::registry::compile_anchored(source).unwrap();
                for word in &words {
                    assert!(!pattern.is_match(word), "{source} matches marker {word}");
                }
            }
        }
    }

    #[test]
    fn directional_layers_have_undirected_rules() {
        for layer in [LayerType::Ports, LayerType::Adapters] {
            for table in [STRUCTURAL_RULES, NAMING_RULES] {
                assert!(table
                    .iter()
                    .any(|spec| spec.layer == layer && spec.direction == DirectionType::None));
            }
        }
    }

    #[test]
    fn directional_rules_only_in_directional_layers() {
        for spec in STRUCTURAL_RULES.iter().chain(NAMING_RULES) {
            if matches!(spec.direction, DirectionType::Driving | DirectionType::Driven) {
                assert!(spec.layer.is_directional());
            }
        }
    }
}
