use anyhow::Context;
use book_models::{Book, BookRequiredProps};
use books_client::{BooksService, HttpBooksClient, InMemoryBooksClient};
use books_config::AppConfig;
use books_page::commands::{self, Command};
use books_page::middleware::{BooksMiddleware, LoggingMiddleware};
use books_page::{logger, AppState, BooksPage, Store};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

/// How long a command waits for its service calls before the prompt returns
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

fn build_service(config: &AppConfig) -> anyhow::Result<Arc<dyn BooksService>> {
    match &config.api_url {
        Some(url) => {
            log::info!("Using books API at {}", url);
            let client = HttpBooksClient::new(url.clone()).context("Failed to create HTTP client")?;
            Ok(Arc::new(client))
        }
        None => {
            log::info!("No API URL configured, using in-memory books");
            Ok(Arc::new(InMemoryBooksClient::with_books(vec![
                Book::new("1", "The Dispossessed", 120.0),
                Book::new("2", "Kindred", 95.5),
            ])))
        }
    }
}

fn print_books(page: &BooksPage) {
    let current = page.current_book().map(|book| book.id);
    for book in page.books().iter() {
        let marker = if current.as_deref() == Some(book.id.as_str()) {
            '*'
        } else {
            ' '
        };
        println!("{} {:>4}  {:<32} {:>10.2}", marker, book.id, book.name, book.earnings);
    }
    println!("  total {:>43.2}", page.total());
}

fn print_status(page: &BooksPage) {
    if let Some(status) = page.state().status_bar.latest() {
        println!(
            "{} [{}] {} {}",
            status.kind.emoji(),
            status.timestamp.format("%H:%M:%S"),
            status.source,
            status.message
        );
    }
}

fn find_book(page: &BooksPage, id: &str) -> Option<Book> {
    page.books().iter().find(|book| book.id == id).cloned()
}

/// Run one command, returns `false` when the user asked to quit
fn execute(page: &mut BooksPage, command: Command) -> bool {
    match command {
        Command::List => print_books(page),
        Command::Select { id } => match find_book(page, &id) {
            Some(book) => page.select(&book),
            None => println!("no book with id {}", id),
        },
        Command::Cancel => page.cancel_selection(),
        Command::Add { name, earnings } => {
            page.save(BookRequiredProps::new(name, earnings));
        }
        Command::Edit { id, earnings, name } => match find_book(page, &id) {
            Some(mut book) => {
                book.earnings = earnings;
                if let Some(name) = name {
                    book.name = name;
                }
                page.save(book);
            }
            None => println!("no book with id {}", id),
        },
        Command::Delete { id } => match find_book(page, &id) {
            Some(book) => page.delete(&book),
            None => println!("no book with id {}", id),
        },
        Command::Status => print_status(page),
        Command::Help => println!("{}", commands::HELP),
        Command::Quit => return false,
    }

    if !page.wait_for_idle(SETTLE_TIMEOUT) {
        println!("still waiting for the books service");
    }
    true
}

fn run(page: &mut BooksPage) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("books> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match commands::parse(&line) {
            Ok(Some(command)) => {
                if !execute(page, command) {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(e) => println!("{}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting books-page, logging to {}", log_file.display());

    let config = AppConfig::load();
    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let service = build_service(&config)?;

    let mut store = Store::new(AppState::with_status_history(config.status_history));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(BooksMiddleware::new(
        service,
        runtime.handle().clone(),
    )));

    let mut page = BooksPage::new(store);
    page.initialize();
    if !page.wait_for_idle(SETTLE_TIMEOUT) {
        println!("still waiting for the books service");
    }
    print_status(&page);
    print_books(&page);

    let result = run(&mut page);

    log::info!("Exiting books-page");
    result
}
