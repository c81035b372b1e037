use crate::engine::{EvalError, Evaluator};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Reducalc - Evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "reducalc")]
#[command(about = "Evaluate arithmetic expressions with brackets, precedence, and power")]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate; starts an interactive session when omitted
    pub expression: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Format one evaluation outcome the way the shell prints it
fn render(outcome: &Result<String, EvalError>) -> String {
    match outcome {
        Ok(value) => value.clone(),
        Err(err) => format!("Calculating error: {}, {}", err.kind(), err.expression()),
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    let evaluator = Evaluator::new();

    if let Some(expression) = args.expression {
        info!("Evaluating single expression: '{}'", expression);
        println!("{}", render(&evaluator.evaluate(&expression)));
        return Ok(());
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                println!("{}", render(&evaluator.evaluate(&line)));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                warn!("Read error: {}", err);
                return Err(err.into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result() {
        let outcome = Ok("14".to_string());
        assert_eq!(render(&outcome), "14");
    }

    #[test]
    fn test_render_error_line() {
        let outcome = Err(EvalError::ZeroDivision("5/0".to_string()));
        assert_eq!(render(&outcome), "Calculating error: ZeroDivision, 5/0");
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs {
            expression: Some("1+2".to_string()),
            log_level: LogLevel::Warn,
        };

        assert_eq!(args.expression.as_deref(), Some("1+2"));
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
