//! CLI host for the PageKit core widgets.
//!
//! # Responsibility
//! - Provide a terminal presentation layer for the contact table and the
//!   slide carousel.
//! - Keep output deterministic for quick local sanity checks.

use log::error;
use pagekit_core::{
    init_logging, open_sqlite, CarouselController, ContactForm, ContactService, ContactStore,
    CoreConfig, SlideSet, SqliteKeyValueStore, SubmitError, ThreadScheduler,
};
use std::error::Error;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const DEFAULT_DB_FILE: &str = "pagekit.sqlite3";
const DEFAULT_SLIDES_SECONDS: u64 = 12;

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("PAGEKIT_LOG_DIR") {
        let level = std::env::var("PAGEKIT_LOG_LEVEL")
            .unwrap_or_else(|_| pagekit_core::default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> CliResult {
    let config = load_config()?;
    let words: Vec<&str> = args.iter().map(String::as_str).collect();

    match words.as_slice() {
        [] | ["ping"] => {
            println!("pagekit_core ping={}", pagekit_core::ping());
            println!("pagekit_core version={}", pagekit_core::core_version());
            Ok(())
        }
        ["version"] => {
            println!("{}", pagekit_core::core_version());
            Ok(())
        }
        ["contacts", rest @ ..] => run_contacts(&config, rest),
        ["slides"] => run_slides(&config, DEFAULT_SLIDES_SECONDS),
        ["slides", seconds] => run_slides(&config, seconds.parse()?),
        _ => Err(usage().into()),
    }
}

fn usage() -> String {
    [
        "usage:",
        "  pagekit [ping|version]",
        "  pagekit contacts list",
        "  pagekit contacts add <name> <email> <phone>",
        "  pagekit contacts delete <index>",
        "  pagekit slides [seconds]",
    ]
    .join("\n")
}

fn load_config() -> Result<CoreConfig, Box<dyn Error>> {
    match std::env::var("PAGEKIT_CONFIG") {
        Ok(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|err| format!("cannot read config `{path}`: {err}"))?;
            Ok(CoreConfig::from_json_str(&text)?)
        }
        Err(_) => Ok(CoreConfig::default()),
    }
}

fn run_contacts(config: &CoreConfig, args: &[&str]) -> CliResult {
    let db_path = std::env::var("PAGEKIT_DB").unwrap_or_else(|_| DEFAULT_DB_FILE.to_string());
    let conn = open_sqlite(&db_path)?;
    let storage = SqliteKeyValueStore::try_new(&conn)?;
    let store = ContactStore::open_with_key(storage, config.contacts.storage_key.as_str())?;
    let mut service = ContactService::new(store);

    match args {
        ["list"] => {}
        ["add", name, email, phone] => {
            match service.submit(&ContactForm::new(*name, *email, *phone)) {
                Ok(_) => println!("{}", service.status().message()),
                Err(SubmitError::Invalid(errors)) => {
                    for error in &errors {
                        eprintln!("{}: {}", error.field.as_str(), error.message());
                    }
                    return Err("contact not added".into());
                }
                Err(err) => {
                    eprintln!("{}", service.status().message());
                    return Err(err.into());
                }
            }
        }
        ["delete", index] => {
            service.delete(index.parse()?)?;
            println!("{}", service.status().message());
        }
        _ => return Err(usage().into()),
    }

    print_contacts(&service);
    Ok(())
}

fn print_contacts<S: pagekit_core::KeyValueStore>(service: &ContactService<S>) {
    for (index, contact) in service.contacts().iter().enumerate() {
        println!(
            "{index}\t{}\t{}\t{}",
            contact.name, contact.email, contact.phone
        );
    }
}

fn run_slides(config: &CoreConfig, seconds: u64) -> CliResult {
    let (scheduler, ticks) = ThreadScheduler::new();
    let mut controller = CarouselController::new(SlideSet::demo(), scheduler, config.carousel);
    let deadline = Instant::now() + Duration::from_secs(seconds);

    print_slide(&controller);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        match ticks.recv_timeout(remaining) {
            Ok(timer) => {
                if controller.on_tick(timer) {
                    print_slide(&controller);
                }
            }
            Err(_) => break,
        }
    }
    Ok(())
}

fn print_slide(controller: &CarouselController<ThreadScheduler>) {
    let slide = controller.current_slide();
    println!("[{}] {}: {}", controller.status_line(), slide.title, slide.content);
}
