// src/nodes.rs

//! Command-line assembly for the three node roles.
//!
//! Each builder turns role configuration into the full argument vector
//! for the external client binary. The supervisor runs the result
//! verbatim; nothing here checks that the binaries are installed or
//! that their flags are still current.

use crate::cli::{Eth1StartArgs, Eth2StartArgs, ValidatorStartArgs};
use crate::exec::NodeCommand;

/// Execution layer: `reth`, with the authenticated engine RPC bound
/// where the consensus client expects it.
pub fn eth1_command(args: &Eth1StartArgs) -> NodeCommand {
    NodeCommand::new("reth")
        .arg("node")
        .arg("--chain")
        .arg(&args.chain)
        .arg("--authrpc.jwtsecret")
        .arg(&args.jwt_path)
        .arg("--authrpc.addr")
        .arg(&args.host)
        .arg("--authrpc.port")
        .arg(args.port.to_string())
        .arg("--datadir")
        .arg(&args.data_dir)
}

/// Consensus layer: `lighthouse beacon_node` in staking mode, syncing
/// from the chain's public checkpoint endpoint.
pub fn eth2_command(args: &Eth2StartArgs) -> NodeCommand {
    NodeCommand::new("lighthouse")
        .arg("beacon_node")
        .arg("--staking")
        .arg("--network")
        .arg(&args.chain)
        .arg("--checkpoint-sync-url")
        .arg(checkpoint_sync_url(&args.chain))
        .arg("--execution-endpoint")
        .arg(&args.eth1_url)
        .arg("--execution-jwt")
        .arg(&args.jwt_path)
        .arg("--datadir")
        .arg(&args.data_dir)
        .arg("--gui")
        .arg("--http-address")
        .arg(&args.host)
        .arg("--http-port")
        .arg(args.port.to_string())
}

/// Validator client: `lighthouse validator_client` against a local
/// beacon node.
pub fn validator_command(args: &ValidatorStartArgs) -> NodeCommand {
    NodeCommand::new("lighthouse")
        .arg("validator_client")
        .arg("--network")
        .arg(&args.chain)
        .arg("--datadir")
        .arg(&args.data_dir)
        .arg("--beacon-nodes")
        .arg(&args.eth2_url)
        .arg("--suggested-fee-recipient")
        .arg(&args.suggested_fee_recipient)
        .arg("--enable-doppelganger-protection")
        // Acknowledges the HTTP API is unencrypted; it binds to
        // localhost and must not be exposed to the public internet.
        .arg("--unencrypted-http-transport")
        .arg("--http")
        .arg("--http-address")
        .arg(&args.host)
        .arg("--http-port")
        .arg(args.port.to_string())
}

fn checkpoint_sync_url(chain: &str) -> String {
    format!("https://{chain}.checkpoint.sigp.io")
}
