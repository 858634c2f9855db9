mod args;

use args::{Cli, Commands, CommonArgs};
use clap::Parser;

use std::fs;
use std::time::Instant;

use aes_rounds::{Cipher, Key, format_matrix, parse_hex, parse_hex_blocks};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no key given (use --key, --key-file, or --gen-key)")]
    MissingKey,

    #[error("no input given (use --hex or --input)")]
    MissingInput,

    #[error("--rounds is required for a {0}-byte key (no standard round count)")]
    RoundsRequired(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Aes(#[from] aes_rounds::Error),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() {
    if let Err(e) = aes_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn aes_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::Encrypt(enc) => {
            let key = if enc.gen_key {
                let rand_key = match enc.key_size {
                    args::KeySize::Bits128 => Key::rand_key_128()?,
                    args::KeySize::Bits192 => Key::rand_key_192()?,
                    args::KeySize::Bits256 => Key::rand_key_256()?,
                };
                match &enc.common.key_file {
                    Some(path) => fs::write(path, rand_key.as_bytes())?,
                    None => println!("Key = {}", hex::encode(rand_key.as_bytes())),
                }
                rand_key
            } else {
                read_key(&enc.common)?
            };
            run(&enc.common, &key, Direction::Encrypt)
        }
        Commands::Decrypt(common) => {
            let key = read_key(&common)?;
            run(&common, &key, Direction::Decrypt)
        }
    }
}

fn read_key(args: &CommonArgs) -> Result<Key, CliError> {
    let bytes = match (&args.key, &args.key_file) {
        (Some(text), _) => parse_hex(text)?,
        (None, Some(path)) => fs::read(path)?,
        (None, None) => return Err(CliError::MissingKey),
    };
    Ok(Key::try_from_slice(&bytes)?)
}

fn run(args: &CommonArgs, key: &Key, direction: Direction) -> Result<(), CliError> {
    let rounds = match (args.rounds, key.key_size()) {
        (Some(r), _) => r,
        (None, Some(size)) => size.rounds(),
        (None, None) => return Err(CliError::RoundsRequired(key.as_bytes().len())),
    };
    let cipher = Cipher::new(key, rounds)?;

    // read input
    let input = match (&args.hex, &args.input) {
        (Some(text), _) => parse_hex_blocks(text)?,
        (None, Some(path)) => fs::read(path)?,
        (None, None) => return Err(CliError::MissingInput),
    };

    let start = Instant::now();

    let output = match (direction, args.parallel) {
        (Direction::Encrypt, false) => cipher.encrypt_ecb(&input)?,
        (Direction::Encrypt, true) => cipher.encrypt_ecb_parallel(&input)?,
        (Direction::Decrypt, false) => cipher.decrypt_ecb(&input)?,
        (Direction::Decrypt, true) => cipher.decrypt_ecb_parallel(&input)?,
    };

    let duration = start.elapsed();

    match &args.output {
        Some(path) => fs::write(path, &output)?,
        None => println!("{}", hex::encode(&output)),
    }

    if args.matrix {
        for (i, chunk) in output.chunks_exact(16).enumerate() {
            let mut block = [0u8; 16];
            block.copy_from_slice(chunk);
            println!("Block {}:\n{}\n", i + 1, format_matrix(&block));
        }
    }

    let verb = match direction {
        Direction::Encrypt => "Encrypted",
        Direction::Decrypt => "Decrypted",
    };
    eprintln!(
        "{verb} {} bytes ({rounds} rounds) in {} ms",
        input.len(),
        duration.as_millis()
    );
    Ok(())
}
