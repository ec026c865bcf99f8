//! Line commands of the interactive books page
//!
//! Each line read from stdin is parsed into a `Command`, which `main`
//! maps onto a `BooksPage` operation.

use anyhow::{bail, Context};

/// Short help listing every command
pub const HELP: &str = "\
list                        show all books and the total
select <id>                 make a book the current one
cancel                      clear the current book
add <earnings> <name>       create a book
edit <id> <earnings> [name] update a book
delete <id>                 delete a book
status                      show the latest status message
quit                        leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Select { id: String },
    Cancel,
    Add { name: String, earnings: f64 },
    Edit { id: String, earnings: f64, name: Option<String> },
    Delete { id: String },
    Status,
    Help,
    Quit,
}

fn parse_earnings(value: Option<&str>) -> anyhow::Result<f64> {
    let value = value.context("missing earnings")?;
    value
        .parse()
        .with_context(|| format!("invalid earnings '{}'", value))
}

fn required<'a>(value: Option<&'a str>, what: &str) -> anyhow::Result<&'a str> {
    value.with_context(|| format!("missing {}", what))
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines.
pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "list" | "ls" => Command::List,
        "select" => Command::Select {
            id: required(words.next(), "book id")?.to_string(),
        },
        "cancel" => Command::Cancel,
        "add" => {
            let earnings = parse_earnings(words.next())?;
            let name = words.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                bail!("missing name");
            }
            Command::Add { name, earnings }
        }
        "edit" => {
            let id = required(words.next(), "book id")?.to_string();
            let earnings = parse_earnings(words.next())?;
            let name = words.collect::<Vec<_>>().join(" ");
            Command::Edit {
                id,
                earnings,
                name: (!name.is_empty()).then_some(name),
            }
        }
        "delete" | "rm" => Command::Delete {
            id: required(words.next(), "book id")?.to_string(),
        },
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command '{}', try 'help'", other),
    };

    Ok(Some(command))
}
