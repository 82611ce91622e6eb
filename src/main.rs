use clap::{Parser, Subcommand};
use pixelveil::cli::{decrypt_image, encrypt_image, DecryptOptions, EncryptOptions};
use pixelveil::config::ShuffleMode;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pixelveil")]
#[command(author, version, about = "Password-keyed image obfuscation (XOR + pixel shuffle)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt an image
    #[command(alias = "e")]
    Encrypt {
        /// Input image (any supported format)
        input: PathBuf,

        /// Output path (always written as PNG)
        output: PathBuf,

        /// Password keying the keystream and the shuffle
        #[arg(short, long, required = true)]
        password: String,

        /// Only XOR the pixel bytes, skip the position shuffle
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Decrypt an image
    #[command(alias = "d")]
    Decrypt {
        /// Encrypted input image
        input: PathBuf,

        /// Output path (always written as PNG)
        output: PathBuf,

        /// Password used during encryption
        #[arg(short, long, required = true)]
        password: String,

        /// The image was encrypted without the position shuffle
        #[arg(long)]
        no_shuffle: bool,
    },
}

fn warn_empty_password(password: &str) {
    if password.is_empty() {
        eprintln!("Warning: empty password produces a fixed, guessable keystream");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt {
            input,
            output,
            password,
            no_shuffle,
        } => {
            warn_empty_password(&password);
            let options = EncryptOptions {
                password,
                shuffle: ShuffleMode::from_flag(no_shuffle),
            };

            match encrypt_image(&input, &output, &options) {
                Ok(()) => {
                    println!("Encrypted image saved to {}", output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decrypt {
            input,
            output,
            password,
            no_shuffle,
        } => {
            warn_empty_password(&password);
            let options = DecryptOptions {
                password,
                shuffle: ShuffleMode::from_flag(no_shuffle),
            };

            match decrypt_image(&input, &output, &options) {
                Ok(()) => {
                    println!("Decrypted image saved to {}", output.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
