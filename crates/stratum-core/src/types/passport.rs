//! Component passport: the architectural coordinates attached to a node.
//!
//! A passport places a file in a bounded context (scope, context name,
//! optional macro zone), a layer, and a direction, then names its component
//! role. Component roles form one closed enumeration per layer.

use serde::{Deserialize, Serialize};

/// Where a file sits relative to bounded contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
    /// Composition root of the whole application.
    Root,
    /// Shared kernel used by every context.
    Shared,
    /// A regular bounded context.
    Context,
}

impl ScopeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Shared => "shared",
            Self::Context => "context",
        }
    }
}

impl std::fmt::Display for ScopeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Architectural tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Composition,
    Domain,
    App,
    Adapters,
    Ports,
    Global,
    Undefined,
}

impl LayerType {
    pub const ALL: [LayerType; 7] = [
        Self::Composition,
        Self::Domain,
        Self::App,
        Self::Adapters,
        Self::Ports,
        Self::Global,
        Self::Undefined,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Composition => "composition",
            Self::Domain => "domain",
            Self::App => "app",
            Self::Adapters => "adapters",
            Self::Ports => "ports",
            Self::Global => "global",
            Self::Undefined => "undefined",
        }
    }

    /// Parse a layer name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.name() == lower)
    }

    /// Whether components in this layer are split into driving and driven sides.
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Adapters | Self::Ports)
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inbound vs. outbound orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionType {
    Driving,
    Driven,
    /// Wildcard: a rule that applies on either side.
    Any,
    /// The layer has no direction.
    None,
    /// The layer has a direction but the path does not say which.
    Undefined,
}

impl DirectionType {
    pub const ALL: [DirectionType; 5] = [
        Self::Driving,
        Self::Driven,
        Self::Any,
        Self::None,
        Self::Undefined,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Driven => "driven",
            Self::Any => "any",
            Self::None => "none",
            Self::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for DirectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the component type was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// A folder on the path matched a rule.
    Structural,
    /// The filename stem matched a rule.
    Name,
    Unknown,
}

macro_rules! component_kind {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

component_kind!(
    /// Roles inside the domain layer.
    DomainType {
        Aggregate => "aggregate",
        Entity => "entity",
        ValueObject => "value_object",
        Event => "event",
        Service => "service",
        RepositoryInterface => "repository_interface",
        Specification => "specification",
        Factory => "factory",
        Error => "error",
    }
);

component_kind!(
    /// Roles inside the application layer.
    AppType {
        UseCase => "use_case",
        Command => "command",
        Query => "query",
        Handler => "handler",
        Service => "service",
        Dto => "dto",
        Interface => "interface",
        EventHandler => "event_handler",
    }
);

component_kind!(
    /// Roles inside the adapters layer.
    AdapterType {
        Controller => "controller",
        Cli => "cli",
        Consumer => "consumer",
        Dto => "dto",
        Repository => "repository",
        Gateway => "gateway",
        Client => "client",
        Acl => "acl",
        Publisher => "publisher",
        Mapper => "mapper",
    }
);

component_kind!(
    /// Roles inside the ports layer.
    PortType {
        Facade => "facade",
        Router => "router",
        Listener => "listener",
        Database => "database",
        Broker => "broker",
        Storage => "storage",
        HttpClient => "http_client",
        Cache => "cache",
    }
);

component_kind!(
    /// Roles inside the composition layer.
    CompositionType {
        Container => "container",
        Entrypoint => "entrypoint",
        Settings => "settings",
        Wiring => "wiring",
    }
);

component_kind!(
    /// Cross-cutting roles, valid in any layer.
    GlobalType {
        Utils => "utils",
        Constants => "constants",
        Exceptions => "exceptions",
        Types => "types",
        Logging => "logging",
    }
);

/// A component role, keyed by the layer whose enumeration it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "layer", content = "kind", rename_all = "snake_case")]
pub enum ComponentType {
    Domain(DomainType),
    App(AppType),
    Adapter(AdapterType),
    Port(PortType),
    Composition(CompositionType),
    Global(GlobalType),
    Unknown,
}

impl ComponentType {
    /// Role name without the layer prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Domain(t) => t.name(),
            Self::App(t) => t.name(),
            Self::Adapter(t) => t.name(),
            Self::Port(t) => t.name(),
            Self::Composition(t) => t.name(),
            Self::Global(t) => t.name(),
            Self::Unknown => "unknown",
        }
    }

    /// The layer whose enumeration contains this role.
    pub fn layer(&self) -> LayerType {
        match self {
            Self::Domain(_) => LayerType::Domain,
            Self::App(_) => LayerType::App,
            Self::Adapter(_) => LayerType::Adapters,
            Self::Port(_) => LayerType::Ports,
            Self::Composition(_) => LayerType::Composition,
            Self::Global(_) => LayerType::Global,
            Self::Unknown => LayerType::Undefined,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Supporting artifacts that carry no architectural behavior of their own.
    /// Views may hide them.
    pub fn is_asset(&self) -> bool {
        matches!(
            self,
            Self::Global(
                GlobalType::Constants | GlobalType::Exceptions | GlobalType::Types | GlobalType::Utils
            ) | Self::Domain(DomainType::Error)
                | Self::Composition(CompositionType::Settings)
        )
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            other => write!(f, "{}.{}", other.layer(), other.name()),
        }
    }
}

/// Classification result attached to a node. Immutable once attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPassport {
    pub scope: ScopeType,
    pub context_name: String,
    /// Dotted namespace between the source root and the context folder.
    pub macro_zone: Option<String>,
    pub layer: LayerType,
    pub direction: DirectionType,
    pub component_type: ComponentType,
    pub match_method: MatchMethod,
    /// Layer of the rule that won the match. Differs from `layer` when a
    /// layer-agnostic rule matched.
    pub rule_layer: Option<LayerType>,
}

impl ComponentPassport {
    /// Passport for a file that cannot be placed at all, e.g. one outside the
    /// source root.
    pub fn unresolved() -> Self {
        Self {
            scope: ScopeType::Context,
            context_name: String::new(),
            macro_zone: None,
            layer: LayerType::Undefined,
            direction: DirectionType::Undefined,
            component_type: ComponentType::Unknown,
            match_method: MatchMethod::Unknown,
            rule_layer: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.component_type.is_known()
    }
}
