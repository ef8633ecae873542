//! The five fixed axes of the test matrix.
//!
//! Every axis is a closed enumeration. Labels returned by `as_str()` are the exact
//! strings that appear in task names, tags and command variables.

use std::fmt;
use std::str::FromStr;

use heck::ToKebabCase;

/// Connection string used by the multi-mongos sharded cluster variant.
pub const MULTI_MONGOS_URI: &str = "mongodb://localhost:27017,localhost:27018";

/// Error parsing an axis label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AxisError {
    #[error("Unknown {axis} '{value}'. Valid values: {valid}")]
    Unknown {
        axis: &'static str,
        value: String,
        valid: String,
    },
}

impl AxisError {
    fn unknown(axis: &'static str, value: &str, valid: &[&str]) -> Self {
        Self::Unknown {
            axis,
            value: value.to_string(),
            valid: valid.join(", "),
        }
    }
}

// =========================================================================
// Server version
// =========================================================================

/// MongoDB server version under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V2_4,
    V2_6,
    V3_0,
    V3_2,
    Latest,
}

impl Version {
    pub const ALL: [Version; 5] = [
        Version::V2_4,
        Version::V2_6,
        Version::V3_0,
        Version::V3_2,
        Version::Latest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V2_4 => "2.4",
            Version::V2_6 => "2.6",
            Version::V3_0 => "3.0",
            Version::V3_2 => "3.2",
            Version::Latest => "latest",
        }
    }
}

// =========================================================================
// Topology
// =========================================================================

/// Server deployment shape started by mongo-orchestration.
///
/// `ShardedClusterMultiMongos` is a sharded cluster reached through two routers.
/// It is not part of [`Topology::ALL`]; the expander only adds it when the
/// multi-mongos option is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Server,
    ReplicaSet,
    ShardedCluster,
    ShardedClusterMultiMongos,
}

impl Topology {
    pub const ALL: [Topology; 3] = [
        Topology::Server,
        Topology::ReplicaSet,
        Topology::ShardedCluster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Server => "server",
            Topology::ReplicaSet => "replica_set",
            Topology::ShardedCluster => "sharded_cluster",
            Topology::ShardedClusterMultiMongos => "sharded_cluster_multi_mongos",
        }
    }

    /// The topology mongo-orchestration actually boots.
    pub fn deployment(&self) -> Topology {
        match self {
            Topology::ShardedClusterMultiMongos => Topology::ShardedCluster,
            other => *other,
        }
    }

    /// Deployment label with underscores replaced by hyphens (`replica-set`).
    pub fn hyphenated(&self) -> String {
        self.deployment().as_str().to_kebab_case()
    }

    /// Extra task-name segment that keeps variant names distinct.
    pub fn name_suffix(&self) -> &'static str {
        match self {
            Topology::ShardedClusterMultiMongos => "-multi-mongos",
            _ => "",
        }
    }

    /// Connection string override for variants that need one.
    pub fn uri_override(&self) -> Option<&'static str> {
        match self {
            Topology::ShardedClusterMultiMongos => Some(MULTI_MONGOS_URI),
            _ => None,
        }
    }
}

// =========================================================================
// Authentication
// =========================================================================

/// Whether the server requires authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auth {
    NoAuth,
    Auth,
}

impl Auth {
    pub const ALL: [Auth; 2] = [Auth::NoAuth, Auth::Auth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Auth::NoAuth => "noauth",
            Auth::Auth => "auth",
        }
    }
}

// =========================================================================
// TLS backend
// =========================================================================

/// TLS library the driver is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsBackend {
    NoSsl,
    OpenSsl,
    DarwinSsl,
    WinSsl,
}

impl TlsBackend {
    pub const ALL: [TlsBackend; 4] = [
        TlsBackend::NoSsl,
        TlsBackend::OpenSsl,
        TlsBackend::DarwinSsl,
        TlsBackend::WinSsl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TlsBackend::NoSsl => "nossl",
            TlsBackend::OpenSsl => "openssl",
            TlsBackend::DarwinSsl => "darwinssl",
            TlsBackend::WinSsl => "winssl",
        }
    }

    /// Value passed as `SSL=` to the compile script.
    pub fn compile_param(&self) -> &'static str {
        match self {
            TlsBackend::NoSsl => "no",
            TlsBackend::OpenSsl => "openssl",
            TlsBackend::DarwinSsl => "darwin",
            TlsBackend::WinSsl => "winssl",
        }
    }
}

// =========================================================================
// SASL
// =========================================================================

/// Whether the driver is built with SASL support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sasl {
    NoSasl,
    Sasl,
}

impl Sasl {
    pub const ALL: [Sasl; 2] = [Sasl::NoSasl, Sasl::Sasl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sasl::NoSasl => "nosasl",
            Sasl::Sasl => "sasl",
        }
    }
}

// =========================================================================
// Display / FromStr
// =========================================================================

macro_rules! label_impls {
    ($ty:ident, $axis:literal, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AxisError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                const VARIANTS: &[$ty] = &[$($ty::$variant),+];
                VARIANTS
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        let valid: Vec<&str> = VARIANTS.iter().map(|v| v.as_str()).collect();
                        AxisError::unknown($axis, s, &valid)
                    })
            }
        }
    };
}

label_impls!(Version, "version", [V2_4, V2_6, V3_0, V3_2, Latest]);
label_impls!(
    Topology,
    "topology",
    [Server, ReplicaSet, ShardedCluster, ShardedClusterMultiMongos]
);
label_impls!(Auth, "auth", [NoAuth, Auth]);
label_impls!(TlsBackend, "tls backend", [NoSsl, OpenSsl, DarwinSsl, WinSsl]);
label_impls!(Sasl, "sasl", [NoSasl, Sasl]);
