//! Command-line argument structures for the `oidconv` tool.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::codec::{Codec, RootPolicy};

/// Root policy for CLI argument parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RootArg {
    /// Only .1.3 (default).
    #[default]
    Snmp,
    /// Any X.690 root (0.x, 1.x, 2.x).
    X690,
}

impl From<RootArg> for RootPolicy {
    fn from(r: RootArg) -> Self {
        match r {
            RootArg::Snmp => RootPolicy::Snmp,
            RootArg::X690 => RootPolicy::X690,
        }
    }
}

/// Convert SNMP OIDs between dotted text and BER bytes.
#[derive(Debug, Parser)]
#[command(name = "oidconv", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub codec: CodecArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// `oidconv` subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode dotted OIDs as BER TLV hex.
    Encode {
        #[arg(required = true, value_name = "OID")]
        oids: Vec<String>,
    },
    /// Decode BER TLV hex (e.g. "06 03 2b 06 01") into dotted OIDs.
    Decode {
        #[arg(required = true, value_name = "HEX")]
        tlvs: Vec<String>,
    },
    /// Print the canonical dotted form of each OID.
    Parse {
        #[arg(required = true, value_name = "OID")]
        oids: Vec<String>,
    },
}

/// Codec configuration arguments.
#[derive(Debug, Args)]
pub struct CodecArgs {
    /// Which OID roots may be encoded.
    #[arg(long = "root", global = true, default_value = "snmp")]
    pub root: RootArg,

    /// Maximum arcs accepted when decoding (unlimited if omitted; RFC 2578 allows 128).
    #[arg(long = "max-arcs", global = true)]
    pub max_arcs: Option<usize>,
}

impl CodecArgs {
    /// Build a codec from the CLI arguments.
    pub fn codec(&self) -> Codec {
        let builder = Codec::builder().root_policy(self.root.into());
        match self.max_arcs {
            Some(max) => builder.max_arcs(max).build(),
            None => builder.build(),
        }
    }
}

/// Logging arguments.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Enable debug logging (snmp_oid=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    /// Enable trace logging (snmp_oid=trace).
    #[arg(short = 'D', long = "trace", global = true)]
    pub trace: bool,
}

impl LogArgs {
    /// The tracing filter directive selected by the flags.
    pub fn filter(&self) -> &'static str {
        if self.trace {
            "snmp_oid=trace"
        } else if self.debug {
            "snmp_oid=debug"
        } else {
            "snmp_oid=warn"
        }
    }

    /// Initialize tracing based on debug/trace flags. Logs go to stderr.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.filter()))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode_command() {
        let cli = Cli::try_parse_from(["oidconv", "encode", "1.3.6.1", ".1.3.6.1.2.1"]).unwrap();
        match cli.command {
            Command::Encode { oids } => assert_eq!(oids, vec!["1.3.6.1", ".1.3.6.1.2.1"]),
            other => panic!("expected encode, got {:?}", other),
        }
        assert_eq!(cli.codec.root, RootArg::Snmp);
        assert_eq!(cli.codec.max_arcs, None);
        assert_eq!(cli.codec.codec().max_arcs(), None);
    }

    #[test]
    fn test_global_codec_flags() {
        let cli = Cli::try_parse_from([
            "oidconv",
            "decode",
            "06 01 88",
            "--root",
            "x690",
            "--max-arcs",
            "16",
        ])
        .unwrap();
        let codec = cli.codec.codec();
        assert_eq!(codec.root_policy(), RootPolicy::X690);
        assert_eq!(codec.max_arcs(), Some(16));
    }

    #[test]
    fn test_requires_operands() {
        assert!(Cli::try_parse_from(["oidconv", "encode"]).is_err());
        assert!(Cli::try_parse_from(["oidconv"]).is_err());
    }

    #[test]
    fn test_log_filter() {
        let cli = Cli::try_parse_from(["oidconv", "parse", "1.3", "-d"]).unwrap();
        assert_eq!(cli.log.filter(), "snmp_oid=debug");

        let cli = Cli::try_parse_from(["oidconv", "parse", "1.3", "-d", "-D"]).unwrap();
        assert_eq!(cli.log.filter(), "snmp_oid=trace");

        let cli = Cli::try_parse_from(["oidconv", "parse", "1.3"]).unwrap();
        assert_eq!(cli.log.filter(), "snmp_oid=warn");
    }
}
