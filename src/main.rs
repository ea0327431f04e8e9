use base_lut::{
    Alphabet, VariantNotFoundError, VariantsConfig, find_closest_variant, generate,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "base-lut")]
#[command(version)]
#[command(about = "Generate the translation tables for base-N code-name codecs as C source", long_about = None)]
struct Cli {
    /// Variants to generate tables for (see --list)
    #[arg(value_name = "VARIANT")]
    variants: Vec<String>,

    /// Generate tables for an ad-hoc alphabet instead of a named variant
    #[arg(short, long, value_name = "CHARS", conflicts_with = "variants")]
    alphabet: Option<String>,

    /// Fold input to upper case in the inverse table (with --alphabet)
    #[arg(long, requires = "alphabet")]
    case_insensitive: bool,

    /// Label used in the emitted array names (with --alphabet)
    #[arg(long, value_name = "NAME", default_value = "custom")]
    label: String,

    /// Elements per line in the emitted declarations
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
    columns: u32,

    /// List available variants
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load variant definitions with user overrides
    let config = VariantsConfig::load_with_overrides()?;
    let columns = cli.columns as usize;

    // Handle list command
    if cli.list {
        println!("Available variants:\n");
        let mut variants: Vec<_> = config.variants.iter().collect();
        variants.sort_by_key(|(name, _)| *name);

        for (name, variant) in variants {
            let radix = variant.chars.chars().count();
            let case_rule = if variant.case_insensitive {
                "fold"
            } else {
                "exact"
            };
            let preview: String = variant.chars.chars().take(20).collect();
            let suffix = if radix > 20 { "..." } else { "" };
            println!(
                "  {:<12} base-{:<3} {:>5}  {}{}",
                name, radix, case_rule, preview, suffix
            );
        }
        return Ok(());
    }

    // Ad-hoc alphabet given on the command line
    if let Some(chars) = &cli.alphabet {
        let alphabet = Alphabet::from_str(chars, cli.case_insensitive)?;
        print!("{}", generate(&cli.label, &alphabet, columns));
        return Ok(());
    }

    if cli.variants.is_empty() {
        return Err(
            "no variant given; use --list to see available variants, \
             or --alphabet to supply one inline"
                .into(),
        );
    }

    for name in &cli.variants {
        let variant = config.get_variant(name).ok_or_else(|| {
            VariantNotFoundError::new(name, find_closest_variant(name, &config.variant_names()))
        })?;
        let alphabet = variant.to_alphabet()?;
        print!("{}", generate(name, &alphabet, columns));
    }

    Ok(())
}
