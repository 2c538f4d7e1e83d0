use std::process::ExitCode;

use linejson::cli::{self, ConverterKind};

fn main() -> ExitCode {
    cli::main(ConverterKind::KeyValue)
}
