// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod jwt;
pub mod logging;
pub mod nodes;
pub mod output;

use std::sync::Arc;

use anyhow::Result;

use crate::cli::{
    CliArgs, Eth1Command, Eth2Command, StakerCommand, UtilCommand, ValidatorCommand,
};
use crate::exec::{NodeCommand, Supervisor};
use crate::output::{OutputSink, StdoutSink};

/// High-level entry point used by `main.rs`.
///
/// Dispatches one parsed subcommand either to the JWT provisioner or to
/// a supervised node process. Node starts block until the node exits;
/// starting the three roles in order (eth1, then eth2, then validator)
/// is the operator's job, one invocation per process.
pub async fn run(args: CliArgs) -> Result<()> {
    let sink: Arc<dyn OutputSink> = Arc::new(StdoutSink);

    match args.command {
        StakerCommand::Eth1(Eth1Command::Start(a)) => {
            start_node(nodes::eth1_command(&a), sink).await
        }
        StakerCommand::Eth2(Eth2Command::Start(a)) => {
            start_node(nodes::eth2_command(&a), sink).await
        }
        StakerCommand::Validator(ValidatorCommand::Start(a)) => {
            start_node(nodes::validator_command(&a), sink).await
        }
        StakerCommand::Util(UtilCommand::GenerateJwt(a)) => {
            jwt::provision(&a.jwt_path, sink.as_ref())?;
            Ok(())
        }
    }
}

async fn start_node(command: NodeCommand, sink: Arc<dyn OutputSink>) -> Result<()> {
    let supervisor = Supervisor::new(sink);
    supervisor.run(&command).await?;
    Ok(())
}
