use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt input to output
    Encrypt(EncryptArgs),

    /// Decrypt input to output
    Decrypt(CommonArgs),
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct CommonArgs {
    /// Key as a hex string.
    #[arg(short = 'k', long = "key", value_name = "HEX", conflicts_with = "key_file")]
    pub key: Option<String>,

    /// Key file path (raw bytes).
    #[arg(long = "key-file")]
    pub key_file: Option<PathBuf>,

    /// Number of rounds. Defaults to 10, 12, or 14 for 128, 192, or 256-bit keys.
    #[arg(short = 'r', long = "rounds")]
    pub rounds: Option<usize>,

    /// Input as a hex string, a multiple of 32 hex characters.
    #[arg(short = 'x', long = "hex", value_name = "HEX", conflicts_with = "input")]
    pub hex: Option<String>,

    /// Input file path (raw bytes, a multiple of 16 bytes).
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file path. Without it, output is printed as hex.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Process blocks in parallel.
    #[arg(short = 'p', long = "parallel")]
    pub parallel: bool,

    /// Also print each output block as a 4x4 matrix.
    #[arg(long = "matrix")]
    pub matrix: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate a random key (written to --key-file if given, printed otherwise)
    #[arg(long = "gen-key", conflicts_with = "key")]
    pub gen_key: bool,

    /// Only valid with --gen-key.
    #[arg(
        long = "key-size",
        value_enum,
        default_value_t = KeySize::Bits128,
        requires = "gen_key"
    )]
    pub key_size: KeySize,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum KeySize {
    #[value(name = "128")]
    Bits128,
    #[value(name = "192")]
    Bits192,
    #[value(name = "256")]
    Bits256,
}
