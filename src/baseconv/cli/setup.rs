use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The converted value only
    #[default]
    Text,
    /// One JSON object with the input, the resolved value and the output
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "baseconv", bin_name = "baseconv", version)]
#[command(
    about = "Convert an integer literal between bases under a fixed bit width",
    long_about = "Convert an integer literal between bases under a fixed bit width.\n\n\
        Literals: 0b1010 (binary), 0o17 (octal), 0x1F (hex), 42 (decimal).\n\
        A leading -0 marks the literal as a two's-complement pattern of nbits,\n\
        e.g. -0xFF is -1 at 8 bits. Underscores are ignored: 0b1111_0000."
)]
pub struct Cli {
    /// Literal to convert (e.g. 0x1F, -0b1000_0000, 255)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Target base: 2, 8, 10 or 16
    #[arg(allow_negative_numbers = true)]
    pub base: String,

    /// Bit width, 1 to 64 [default: 32]
    #[arg(allow_negative_numbers = true)]
    pub nbits: Option<String>,

    /// Print a conversion trace to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
