use cpp_lexer::config::runtime::RuntimeConfig;
use cpp_lexer::logging::{self, codes};
use cpp_lexer::pipeline;
use std::env;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let source_path = env::args().nth(1);

    if matches!(source_path.as_deref(), Some("--help" | "-h")) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = RuntimeConfig::load(source_path);

    if let Err(e) = init(&config) {
        eprintln!("Error [{}]: {}", codes::system::INTERNAL_ERROR, e);
        return ExitCode::FAILURE;
    }

    let stdout = io::stdout();
    match pipeline::process_file(&config, BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", pipeline::error_line(&error));
            ExitCode::FAILURE
        }
    }
}

fn init(config: &RuntimeConfig) -> Result<(), String> {
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    pipeline::validate_pipeline()
}

fn print_help() {
    println!("cpp_lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Classifies the tokens of a C++ snippet");
    println!();
    println!("USAGE:");
    println!("    cpp_lexer [FILE]");
    println!();
    println!("ARGUMENTS:");
    println!(
        "    [FILE]    Source to classify (default: {})",
        cpp_lexer::config::compile_time::source::DEFAULT_SOURCE_PATH
    );
    println!();
    println!("ENVIRONMENT:");
    println!("    CPP_LEXER_EMIT_TRACE               true|false, per-token trace lines");
    println!("    CPP_LEXER_EMIT_RUNNING_SUMMARY     true|false, summary after every token");
    println!("    CPP_LEXER_REPORT_FORMAT            text|json");
    println!("    CPP_LEXER_LOGGING_ENABLE_CONSOLE   true|false, diagnostics on stderr");
    println!("    CPP_LEXER_LOGGING_USE_STRUCTURED   true|false, JSON diagnostics");
    println!("    CPP_LEXER_LOGGING_MIN_LEVEL        error|warn|info|debug");
}
