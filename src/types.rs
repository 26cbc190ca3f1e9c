//! Wire-level shapes shared by the client and the tool layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON request body, built straight from validated tool arguments.
pub type Payload = Map<String, Value>;

/// Optional cleanup flags accepted by the application, database and service
/// delete endpoints. Every flag that is set (true or false) is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_configurations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volumes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_cleanup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_connected_networks: Option<bool>,
}

impl DeleteOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("delete_configurations", self.delete_configurations),
            ("delete_volumes", self.delete_volumes),
            ("docker_cleanup", self.docker_cleanup),
            ("delete_connected_networks", self.delete_connected_networks),
        ]
        .into_iter()
        .filter_map(|(key, flag)| flag.map(|value| (key, value.to_string())))
        .collect()
    }
}

/// Flags for starting an application. Only enabled flags reach the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    pub force: bool,
    pub instant_deploy: bool,
}

impl StartOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.force {
            pairs.push(("force", "true".to_string()));
        }
        if self.instant_deploy {
            pairs.push(("instant_deploy", "true".to_string()));
        }
        pairs
    }
}

/// Target selection for the generic deploy endpoint. `tag` and `uuid` accept
/// comma-separated lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOptions {
    pub tag: Option<String>,
    pub uuid: Option<String>,
    pub force: bool,
}

impl DeployOptions {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(tag) = self.tag.as_ref().filter(|t| !t.is_empty()) {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(uuid) = self.uuid.as_ref().filter(|u| !u.is_empty()) {
            pairs.push(("uuid", uuid.clone()));
        }
        if self.force {
            pairs.push(("force", "true".to_string()));
        }
        pairs
    }
}

/// Where a new application's code comes from. Each source has its own
/// creation endpoint; the request fields differ per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSource {
    PublicGit,
    PrivateGithubApp,
    PrivateDeployKey,
    Dockerfile,
    DockerImage,
    DockerCompose,
}

impl ApplicationSource {
    pub const ALL: [ApplicationSource; 6] = [
        ApplicationSource::PublicGit,
        ApplicationSource::PrivateGithubApp,
        ApplicationSource::PrivateDeployKey,
        ApplicationSource::Dockerfile,
        ApplicationSource::DockerImage,
        ApplicationSource::DockerCompose,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            ApplicationSource::PublicGit => "/applications/public",
            ApplicationSource::PrivateGithubApp => "/applications/private-github-app",
            ApplicationSource::PrivateDeployKey => "/applications/private-deploy-key",
            ApplicationSource::Dockerfile => "/applications/dockerfile",
            ApplicationSource::DockerImage => "/applications/dockerimage",
            ApplicationSource::DockerCompose => "/applications/dockercompose",
        }
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            ApplicationSource::PublicGit => "create_public_application",
            ApplicationSource::PrivateGithubApp => "create_private_ghapp_application",
            ApplicationSource::PrivateDeployKey => "create_private_deploykey_application",
            ApplicationSource::Dockerfile => "create_dockerfile_application",
            ApplicationSource::DockerImage => "create_dockerimage_application",
            ApplicationSource::DockerCompose => "create_dockercompose_application",
        }
    }

    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.tool_name() == name)
    }
}

/// Database engines Coolify can provision. Creation endpoints differ per
/// engine; update, delete and lifecycle calls are engine-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseEngine {
    Postgresql,
    Mysql,
    Mariadb,
    Mongodb,
    Redis,
    Keydb,
    Clickhouse,
    Dragonfly,
}

impl DatabaseEngine {
    pub const ALL: [DatabaseEngine; 8] = [
        DatabaseEngine::Postgresql,
        DatabaseEngine::Mysql,
        DatabaseEngine::Mariadb,
        DatabaseEngine::Mongodb,
        DatabaseEngine::Redis,
        DatabaseEngine::Keydb,
        DatabaseEngine::Clickhouse,
        DatabaseEngine::Dragonfly,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "/databases/postgresql",
            DatabaseEngine::Mysql => "/databases/mysql",
            DatabaseEngine::Mariadb => "/databases/mariadb",
            DatabaseEngine::Mongodb => "/databases/mongodb",
            DatabaseEngine::Redis => "/databases/redis",
            DatabaseEngine::Keydb => "/databases/keydb",
            DatabaseEngine::Clickhouse => "/databases/clickhouse",
            DatabaseEngine::Dragonfly => "/databases/dragonfly",
        }
    }

    pub fn tool_name(self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "create_postgres_database",
            DatabaseEngine::Mysql => "create_mysql_database",
            DatabaseEngine::Mariadb => "create_mariadb_database",
            DatabaseEngine::Mongodb => "create_mongodb_database",
            DatabaseEngine::Redis => "create_redis_database",
            DatabaseEngine::Keydb => "create_keydb_database",
            DatabaseEngine::Clickhouse => "create_clickhouse_database",
            DatabaseEngine::Dragonfly => "create_dragonfly_database",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DatabaseEngine::Postgresql => "PostgreSQL",
            DatabaseEngine::Mysql => "MySQL",
            DatabaseEngine::Mariadb => "MariaDB",
            DatabaseEngine::Mongodb => "MongoDB",
            DatabaseEngine::Redis => "Redis",
            DatabaseEngine::Keydb => "KeyDB",
            DatabaseEngine::Clickhouse => "Clickhouse",
            DatabaseEngine::Dragonfly => "Dragonfly",
        }
    }

    /// Engine-specific optional string fields accepted on creation.
    pub fn credential_fields(self) -> &'static [&'static str] {
        match self {
            DatabaseEngine::Postgresql => &[
                "postgres_user",
                "postgres_password",
                "postgres_db",
                "postgres_initdb_args",
                "postgres_host_auth_method",
                "postgres_conf",
            ],
            DatabaseEngine::Mysql => &[
                "mysql_root_password",
                "mysql_user",
                "mysql_password",
                "mysql_database",
            ],
            DatabaseEngine::Mariadb => &[
                "mariadb_root_password",
                "mariadb_user",
                "mariadb_password",
                "mariadb_database",
                "mariadb_conf",
            ],
            DatabaseEngine::Mongodb => &[
                "mongo_initdb_root_username",
                "mongo_initdb_root_password",
                "mongo_initdb_database",
                "mongo_conf",
            ],
            DatabaseEngine::Redis => &["redis_password", "redis_conf"],
            DatabaseEngine::Keydb => &["keydb_password", "keydb_conf"],
            DatabaseEngine::Clickhouse => &["clickhouse_admin_user", "clickhouse_admin_password"],
            DatabaseEngine::Dragonfly => &["dragonfly_password"],
        }
    }

    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|engine| engine.tool_name() == name)
    }
}

/// Owner of an environment-variable collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvScope {
    Application,
    Service,
}

impl EnvScope {
    pub fn collection(self) -> &'static str {
        match self {
            EnvScope::Application => "applications",
            EnvScope::Service => "services",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnvScope::Application => "application",
            EnvScope::Service => "service",
        }
    }
}

pub const BUILD_PACKS: &[&str] = &["nixpacks", "static", "dockerfile", "dockercompose"];

pub const PROXY_TYPES: &[&str] = &["traefik", "caddy", "none"];
