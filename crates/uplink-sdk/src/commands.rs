//! Command table exposed to the CLI layer.
//!
//! Each [`UplinkCommand`] names an operation that runs against an
//! [`UplinkConnection`]. The CLI binds subcommands to these entries and
//! decides how to print the [`CommandOutput`].

use serde::Serialize;
use strum::IntoEnumIterator;
use uplink_models::NodeInfo;

use crate::connection::UplinkConnection;
use crate::error::UplinkError;
use crate::transport::TransportPlugin;

/// Commands available on a configured uplink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum UplinkCommand {
    /// Fetch node information from the local Lightning node.
    Info,
}

impl UplinkCommand {
    /// One-line description for help output.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Info => "Get info about your lnd node",
        }
    }

    /// Run the command over `uplink`.
    pub async fn execute<T: TransportPlugin>(
        self,
        uplink: &UplinkConnection<T>,
    ) -> Result<CommandOutput, UplinkError> {
        match self {
            Self::Info => Ok(CommandOutput::NodeInfo(uplink.query_node_info().await?)),
        }
    }
}

/// Result of running an [`UplinkCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    /// Output of [`UplinkCommand::Info`].
    NodeInfo(NodeInfo),
}

/// `(name, description)` for every command, in declaration order.
pub fn commands() -> Vec<(String, &'static str)> {
    UplinkCommand::iter()
        .map(|c| (c.to_string(), c.describe()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_info() {
        let table = commands();
        assert_eq!(table, vec![("info".to_string(), "Get info about your lnd node")]);
    }

    #[test]
    fn command_parses_from_name() {
        assert_eq!("info".parse::<UplinkCommand>().unwrap(), UplinkCommand::Info);
        assert!("channels".parse::<UplinkCommand>().is_err());
    }

    #[test]
    fn output_serializes_as_node_info() {
        let output = CommandOutput::NodeInfo(NodeInfo {
            alias: "leaf".into(),
            ..NodeInfo::default()
        });
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["alias"], "leaf");
    }
}
