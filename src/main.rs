#[cfg(not(feature = "syx-file"))]
fn main() {
    eprintln!(
        "The p600syx CLI requires the \"syx-file\" feature. Rebuild with `--features syx-file` to enable file loading."
    );
}

#[cfg(feature = "syx-file")]
mod cli {
    use std::env;

    use p600syx::{load_file, DecoderRegistry, SyxError, ToolConfig};

    fn usage() {
        eprintln!(
            "Usage:\n  p600syx [--decoder <name>] [--config <path>] [--quiet] <file.syx>...\n\nFlags:\n  --decoder <name>     Force a dialect decoder (sequential|gligli|imogen)\n  --config <path>      Read preferences from a specific config file\n  -q, --quiet          Only print program numbers\n  -h, --help           Show this help\n\nExamples:\n  p600syx capture.syx\n  p600syx --decoder imogen bank.syx"
        );
    }

    pub fn run() -> p600syx::Result<()> {
        let mut forced_decoder: Option<String> = None;
        let mut config_path: Option<String> = None;
        let mut quiet = false;
        let mut show_help = false;
        let mut files: Vec<String> = Vec::new();

        let mut args = env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    show_help = true;
                }
                "--quiet" | "-q" => {
                    quiet = true;
                }
                "--decoder" => {
                    if let Some(value) = args.next() {
                        forced_decoder = Some(value);
                    } else {
                        eprintln!("--decoder requires an argument");
                        show_help = true;
                    }
                }
                "--config" => {
                    if let Some(value) = args.next() {
                        config_path = Some(value);
                    } else {
                        eprintln!("--config requires an argument");
                        show_help = true;
                    }
                }
                _ if arg.starts_with('-') => {
                    eprintln!("Unknown flag: {}", arg);
                    show_help = true;
                }
                _ => {
                    files.push(arg);
                }
            }
        }

        if show_help || files.is_empty() {
            usage();
            return Ok(());
        }

        let mut config = match &config_path {
            Some(path) => ToolConfig::load(path)?,
            None => ToolConfig::load_default(),
        };
        if forced_decoder.is_some() {
            config.decoder = forced_decoder;
        }
        if quiet {
            config.quiet = Some(true);
        }

        let registry = DecoderRegistry::with_default_decoders();
        if let Some(name) = &config.decoder {
            if registry.get(name).is_none() {
                return Err(SyxError::ConfigError(format!(
                    "unknown decoder {name:?} (available: sequential, gligli, imogen)"
                )));
            }
        }

        for file in &files {
            let messages = load_file(file)?;
            println!("{}: {} message(s)", file, messages.len());
            for (index, msg) in messages.iter().enumerate() {
                let decoder = match &config.decoder {
                    Some(name) => registry.get(name),
                    None => registry.select(msg),
                };
                let decoder = match decoder {
                    Some(decoder) => decoder,
                    None => {
                        eprintln!("Message {}: no decoder recognizes this dump", index);
                        continue;
                    }
                };
                match decoder.decode(msg) {
                    Ok(patch) => {
                        println!("Message {} ({} dialect)", index, decoder.name());
                        if config.quiet.unwrap_or(false) {
                            println!("Program: {}", patch.program);
                        } else {
                            print!("{}", patch);
                        }
                    }
                    Err(err) => eprintln!("Message {}: decode failed: {}", index, err),
                }
            }
        }

        Ok(())
    }
}

#[cfg(feature = "syx-file")]
fn main() -> p600syx::Result<()> {
    cli::run()
}
