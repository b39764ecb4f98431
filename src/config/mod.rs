use crate::domain::int32::Int32;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Text,
}

impl InputFormat {
    pub fn decode(&self, input: &str) -> Result<Int32> {
        let mut value = Int32::null();
        match self {
            InputFormat::Json => value.unmarshal_json(input)?,
            InputFormat::Text => value.unmarshal_text(input)?,
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "null-int32")]
#[command(about = "Decode nullable int32 values and show their encodings")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = InputFormat::Json)]
    pub from: InputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(help = "Values to decode")]
    pub inputs: Vec<String>,
}

impl Validate for CliConfig {
    fn validate(&self) -> anyhow::Result<()> {
        validate_non_empty("inputs", &self.inputs)
    }
}
