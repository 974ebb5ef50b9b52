// Header inspection tool: runs the same trust checks a wallet applies to
// incoming headers, one header at a time, from the command line.
use clap::Parser;
use log::{error, info, LevelFilter};
use serde_json::json;
use spv_header_trust::{
    Command, HeaderFields, HeaderValidator, HeaderView, Opt, ProofOfWork, GLOBAL_CONFIG,
};
use std::process;

fn main() {
    // The logger accepts everything; the configured level is applied through
    // the global max level once the configuration has been read.
    env_logger::builder().filter_level(LevelFilter::Trace).init();
    log::set_max_level(LevelFilter::Info);

    let opt = Opt::parse();

    let level = GLOBAL_CONFIG
        .get_log_level()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    if let Some(network) = opt.network {
        GLOBAL_CONFIG.set_network(network);
    }

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let params = GLOBAL_CONFIG.params();

    match command {
        Command::Params => {
            let summary = json!({
                "network": params.network,
                "dns_seeds": params.dns_seeds,
                "standard_port": params.standard_port,
                "magic_number": format!("0x{:08x}", params.magic_number),
                "services": params.services,
                "difficulty_verifier": params.verifier.name(),
                "checkpoints": params.checkpoints.checkpoints(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Hash { header } => {
            let raw = decode_header_hex(&header)?;
            let pow = ProofOfWork::new_proof_of_work(&raw)?;
            println!("identity hash: {}", pow.identity_hash());
            println!("bits:          0x{:08x}", pow.bits());
            println!("target:        {:064x}", pow.target());
            println!("meets target:  {}", pow.validate());
        }
        Command::Checkpoint { height, exact } => {
            let found = if exact {
                params.lookup_exact(height)
            } else {
                params.lookup_at_or_before(height)
            };
            match found {
                Some(checkpoint) => println!("{}", serde_json::to_string_pretty(checkpoint)?),
                None if exact => println!("No checkpoint at height {height}"),
                None => println!("No checkpoint at or before height {height}"),
            }
        }
        Command::Verify {
            previous,
            previous_height,
            candidate,
            transition_time,
        } => {
            let candidate_height = previous_height
                .checked_add(1)
                .ok_or("previous height is already the maximum")?;

            let previous_raw = decode_header_hex(&previous)?;
            let candidate_raw = decode_header_hex(&candidate)?;
            let previous_view = header_view(&previous_raw, previous_height)?;
            let candidate_view = header_view(&candidate_raw, candidate_height)?;

            let verdict = HeaderValidator::new(params).validate(
                &candidate_view,
                &candidate_raw,
                Some(&previous_view),
                transition_time,
            )?;
            info!(
                "{} network verdict for {} at height {}: {:?}",
                params.network, candidate_view.block_hash, candidate_height, verdict
            );

            if !verdict.is_accepted() {
                return Err(format!("Header rejected: {verdict:?}").into());
            }
            println!("accepted");
        }
    }
    Ok(())
}

fn decode_header_hex(text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    hex::decode(text.trim()).map_err(|e| format!("Invalid header hex: {e}").into())
}

// Headers are identified by their proof-of-work hash
fn header_view(raw: &[u8], height: u32) -> Result<HeaderView, Box<dyn std::error::Error>> {
    let fields = HeaderFields::parse(raw)?;
    let identity = ProofOfWork::pow_hash(raw)?;
    Ok(fields.view(height, identity.into()))
}
