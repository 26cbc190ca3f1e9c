use crate::client::CoolifyClient;
use crate::config::CoolifyConfig;
use crate::errors::ToolError;
use crate::managers::applications::ApplicationManager;
use crate::managers::databases::DatabaseManager;
use crate::managers::deployments::DeploymentManager;
use crate::managers::env_vars::EnvVarManager;
use crate::managers::github_apps::GithubAppManager;
use crate::managers::keys::KeyManager;
use crate::managers::projects::ProjectManager;
use crate::managers::servers::ServerManager;
use crate::managers::services::ServiceManager;
use crate::managers::system::SystemManager;
use crate::managers::teams::TeamManager;
use crate::services::logger::Logger;
use crate::services::tool_executor::{ToolExecutor, ToolHandler};
use crate::types::EnvScope;
use std::sync::Arc;

/// Everything a running server needs, built once at startup.
pub struct App {
    pub logger: Logger,
    pub client: Arc<CoolifyClient>,
}

impl App {
    pub fn initialize(config: CoolifyConfig, logger: Logger) -> Result<Self, ToolError> {
        let client = Arc::new(CoolifyClient::new(config, logger.clone())?);
        Ok(Self { logger, client })
    }

    /// One handler per resource family, in the order tools are listed.
    pub fn handlers(&self) -> Vec<Arc<dyn ToolHandler>> {
        let logger = &self.logger;
        let client = &self.client;
        vec![
            Arc::new(ServerManager::new(logger.clone(), client.clone())),
            Arc::new(ProjectManager::new(logger.clone(), client.clone())),
            Arc::new(ApplicationManager::new(logger.clone(), client.clone())),
            Arc::new(EnvVarManager::new(
                logger.clone(),
                client.clone(),
                EnvScope::Application,
            )),
            Arc::new(DatabaseManager::new(logger.clone(), client.clone())),
            Arc::new(ServiceManager::new(logger.clone(), client.clone())),
            Arc::new(EnvVarManager::new(
                logger.clone(),
                client.clone(),
                EnvScope::Service,
            )),
            Arc::new(KeyManager::new(logger.clone(), client.clone())),
            Arc::new(GithubAppManager::new(logger.clone(), client.clone())),
            Arc::new(TeamManager::new(logger.clone(), client.clone())),
            Arc::new(DeploymentManager::new(logger.clone(), client.clone())),
            Arc::new(SystemManager::new(logger.clone(), client.clone())),
        ]
    }

    pub fn tool_executor(&self) -> Result<ToolExecutor, ToolError> {
        ToolExecutor::new(self.logger.clone(), self.handlers())
    }
}
