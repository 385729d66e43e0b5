use clap::Parser;
use roman_calc::core::credentials::{is_valid_email, verify_password};
use roman_calc::core::numeral::{convert_to_old_roman, parse_arabic};
use roman_calc::domain::model::RegistrationOutcome;
use roman_calc::utils::error::{CalcError, ErrorCategory};
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{
    CliConfig, Command, FileStore, HttpModernResolver, RegistrationForm, RomanConverter, Settings,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, settings.log_level.as_deref(), settings.log_format());
    tracing::debug!("Effective settings: {:?}", settings);

    match run(&cli, &settings).await {
        Ok(RunStatus::Success) => {}
        Ok(RunStatus::Rejected) => {
            tracing::warn!("Submission rejected");
            std::process::exit(REJECTED_EXIT_CODE);
        }
        Err(e) => {
            tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

/// Non-error result of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    Success,
    /// Input was processed but not accepted (registration failed validation).
    Rejected,
}

const REJECTED_EXIT_CODE: i32 = 1;

impl From<&RegistrationOutcome> for RunStatus {
    fn from(outcome: &RegistrationOutcome) -> Self {
        if outcome.is_registered() {
            RunStatus::Success
        } else {
            RunStatus::Rejected
        }
    }
}

fn exit_code(e: &CalcError) -> i32 {
    match e.category() {
        ErrorCategory::Input => 1,
        ErrorCategory::Resolution => 2,
        ErrorCategory::Configuration | ErrorCategory::System => 3,
    }
}

async fn run(cli: &CliConfig, settings: &Settings) -> roman_calc::Result<RunStatus> {
    match &cli.command {
        Command::Old { value } => {
            let numeral = convert_to_old_roman(i64::from(parse_arabic(value)?))?;
            println!("{}", numeral);
        }
        Command::Modern { value } => {
            let converter = RomanConverter::new(HttpModernResolver::from_config(settings)?);
            let numeral = converter.modern(i64::from(parse_arabic(value)?)).await?;
            println!("{}", numeral);
        }
        Command::Convert { value, offline } => {
            let converter = RomanConverter::new(HttpModernResolver::from_config(settings)?);
            let result = converter
                .convert(i64::from(parse_arabic(value)?), !offline)
                .await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("arabic: {}", result.arabic);
                println!("old:    {}", result.old);
                if let Some(modern) = &result.modern {
                    println!("modern: {}", modern);
                }
            }
        }
        Command::CheckEmail { email } => {
            let valid = is_valid_email(email);
            if cli.json {
                println!("{}", serde_json::json!({ "email": email, "valid": valid }));
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
        }
        Command::CheckPassword { password } => {
            let report = verify_password(password);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.pass {
                println!("valid");
            } else {
                println!("invalid");
                for failure in report.failures() {
                    println!("  - {}", failure);
                }
            }
        }
        Command::Register { email, password } => {
            let form = RegistrationForm::new(FileStore::from_config(settings));
            let outcome = form.submit(email, password).await?;
            for line in outcome.messages() {
                println!("{}", line);
            }
            return Ok(RunStatus::from(&outcome));
        }
        Command::Unregister => {
            let form = RegistrationForm::new(FileStore::from_config(settings));
            form.unregister().await?;
            println!("Registration removed");
        }
    }

    Ok(RunStatus::Success)
}
