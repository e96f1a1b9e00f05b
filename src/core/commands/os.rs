use super::{CommandError, OperationResult, OsQuery, Router};
use crate::fs::Gateway;
use crate::system::info;

impl<G: Gateway> Router<G> {
    pub(super) fn os(&self, query: OsQuery) -> Result<OperationResult, CommandError> {
        let line = match query {
            OsQuery::Eol => format!("Default system End-Of-Line: {:?}", info::eol()),
            OsQuery::Cpus => {
                let cpus = info::cpus();
                match cpus.model {
                    Some(model) => format!("Overall amount of CPUs: {} ({})", cpus.count, model),
                    None => format!("Overall amount of CPUs: {}", cpus.count),
                }
            }
            OsQuery::HomeDir => {
                let home = info::home_dir().ok_or_else(|| {
                    CommandError::OperationFailed("home directory is unknown".to_string())
                })?;
                format!("Home directory: {}", home.display())
            }
            OsQuery::Username => {
                let name = info::username().ok_or_else(|| {
                    CommandError::OperationFailed("system user name is unknown".to_string())
                })?;
                format!("System user name: {}", name)
            }
            OsQuery::Architecture => format!("CPU architecture: {}", info::architecture()),
        };
        Ok(OperationResult::success(line))
    }
}
