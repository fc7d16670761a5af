//! oidconv: Convert SNMP OIDs between dotted text and BER bytes.
//!
//! Part of the snmp-oid crate.

use std::process::ExitCode;

use clap::Parser;
use snmp_oid::Oid;
use snmp_oid::cli::args::{Cli, Command};
use snmp_oid::format::hex;

fn main() -> ExitCode {
    let cli = Cli::parse();

    cli.log.init_tracing();

    let codec = cli.codec.codec();
    let mut failed = false;

    match &cli.command {
        Command::Encode { oids } => {
            for s in oids {
                match Oid::parse(s).and_then(|oid| codec.encode(&oid)) {
                    Ok(tlv) => println!("{}", hex::encode(&tlv)),
                    Err(e) => {
                        eprintln!("Error: {}: {}", s, e);
                        failed = true;
                    }
                }
            }
        }
        Command::Decode { tlvs } => {
            for s in tlvs {
                let bytes = match hex::decode(s) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        eprintln!("Error: {}: {}", s, e);
                        failed = true;
                        continue;
                    }
                };
                let mut source = &bytes[..];
                match codec.read_tlv(&mut source) {
                    Ok((oid, consumed)) => {
                        println!("{}", oid);
                        if consumed < bytes.len() {
                            eprintln!(
                                "Warning: {}: {} trailing bytes ignored",
                                s,
                                bytes.len() - consumed
                            );
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}: {}", s, e);
                        failed = true;
                    }
                }
            }
        }
        Command::Parse { oids } => {
            for s in oids {
                match Oid::parse(s) {
                    Ok(oid) => println!("{}", oid),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        failed = true;
                    }
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
