pub mod context;
pub mod contact_commands;
pub mod birthday_commands;

use std::path::Path;
use tracing::info;

use crate::storage;
use context::CLIContext;

/// Run the interactive REPL against the data file at `path`.
pub fn run(path: &Path) {
    println!("Welcome to the assistant bot!");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let book = storage::load(path);
    if !book.is_empty() {
        println!("Loaded {} contact(s) from {}", book.len(), path.display());
    }
    info!(contacts = book.len(), "session started");

    let mut ctx = CLIContext::new(book, path.to_path_buf());
    repl_loop(&mut ctx);

    // Persist on the way out; the in-memory book is otherwise gone.
    if let Err(e) = storage::save(&ctx.book, &ctx.path) {
        println!("Error saving to {}: {}", ctx.path.display(), e);
    }
    println!("Good bye!");
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "exit" | "quit" | "q" | "close" => break,
            "hello" => println!("How can I help you?"),

            // Contact commands
            "all" | "list" | "ls" => contact_commands::list(ctx),
            "add" => contact_commands::add(ctx, args),
            "change" => contact_commands::change(ctx, args),
            "remove-phone" => contact_commands::remove_phone(ctx, args),
            "phone" => contact_commands::phone(ctx, args),
            "delete" => contact_commands::delete(ctx, args),
            "search" => contact_commands::search(ctx, args),

            // Birthday commands
            "add-birthday" => birthday_commands::add_birthday(ctx, args),
            "show-birthday" => birthday_commands::show_birthday(ctx, args),
            "birthdays" => birthday_commands::birthdays(ctx),

            "save" => save(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

fn save(ctx: &CLIContext) {
    match storage::save(&ctx.book, &ctx.path) {
        Ok(()) => println!(
            "Saved {} contact(s) to {}",
            ctx.book.len(),
            ctx.path.display()
        ),
        Err(e) => ctx.print_error(&e),
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  Contacts:
    all                               List all contacts
    add <name> <phone>                Add a contact, or a phone to an existing one
    change <name> <old> <new>         Replace a contact's phone number
    remove-phone <name> <phone>       Delete one phone number
    phone <name>                      Show a contact's phone numbers
    delete <name>                     Delete a contact
    search <pattern>                  Search names and phones (case-insensitive)

  Birthdays:
    add-birthday <name> <DD.MM.YYYY>  Set a contact's birthday
    show-birthday <name>              Show a contact's birthday
    birthdays                         Who to congratulate in the next week

  Other:
    save                              Write the book to disk now
    hello                             Greeting
    help                              Show this help
    exit / quit / q / close           Save and exit

TIPS:
  - Names may contain spaces; the last word of 'add' is the phone number
  - Lookups are exact on name; use 'search' for fuzzy matching"#
    );
}
