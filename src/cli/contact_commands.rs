use crate::cli::context::CLIContext;
use crate::error::AbookError;
use crate::model::Record;
use crate::validation;

pub fn list(ctx: &CLIContext) {
    if ctx.book.is_empty() {
        println!("No contacts yet. Use 'add' to create one.");
        return;
    }

    println!("Contacts ({}):", ctx.book.len());
    println!();
    for record in ctx.book.iter() {
        println!("  {}", format_record(record));
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let Some((name, phone)) = split_last(args) else {
        println!("Usage: add <name> <phone>");
        return;
    };
    let name = match validation::non_blank(name, "name") {
        Ok(n) => n,
        Err(e) => return ctx.print_error(&e),
    };

    // Append to an existing contact, or create a fresh record.
    if let Some(record) = ctx.book.find_mut(&name) {
        match record.add_phone(phone) {
            Ok(added) => println!("Phone {} added to contact {}", added, name),
            Err(e) => ctx.print_error(&e),
        }
        return;
    }

    let mut record = Record::create(name.clone());
    let added = match record.add_phone(phone) {
        Ok(p) => p,
        Err(e) => return ctx.print_error(&e),
    };
    match ctx.book.add_record(record) {
        Ok(()) => println!("Contact {} added with phone {}", name, added),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn change(ctx: &mut CLIContext, args: &str) {
    let parsed = split_last(args).and_then(|(rest, new_phone)| {
        split_last(rest).map(|(name, old_phone)| (name, old_phone, new_phone))
    });
    let Some((name, old_phone, new_phone)) = parsed else {
        println!("Usage: change <name> <old phone> <new phone>");
        return;
    };

    let Some(record) = ctx.book.find_mut(name) else {
        return not_found(name);
    };
    match record.edit_phone(old_phone, new_phone) {
        Ok(new) => println!("Contact {} updated.\nNew phone: {}", name, new),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove_phone(ctx: &mut CLIContext, args: &str) {
    let Some((name, phone)) = split_last(args) else {
        println!("Usage: remove-phone <name> <phone>");
        return;
    };

    let Some(record) = ctx.book.find_mut(name) else {
        return not_found(name);
    };
    match record.remove_phone(phone) {
        Ok(removed) => println!("Phone {} deleted from contact {}", removed, name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn phone(ctx: &CLIContext, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Usage: phone <name>");
        return;
    }

    match ctx.book.find(name) {
        Some(record) if record.phones.is_empty() => {
            println!("No phones stored for contact {}", name)
        }
        Some(record) => println!("{}: {}", name, join_phones(record)),
        None => not_found(name),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Usage: delete <name>");
        return;
    }

    match ctx.book.delete_record(name) {
        Ok(_) => println!("Contact {} deleted.", name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn search(ctx: &CLIContext, args: &str) {
    let pattern = args.trim();
    if pattern.is_empty() {
        println!("Usage: search <pattern>");
        return;
    }

    let results = ctx.book.search(pattern);
    if results.is_empty() {
        println!("No contacts found matching '{}'", pattern);
        return;
    }

    println!("Found {} contact(s) matching '{}':", results.len(), pattern);
    for record in results {
        println!("  {}", format_record(record));
    }
}

/// Splits off the last whitespace-separated token, so names may contain
/// spaces: "add John Smith 0501234567" -> ("John Smith", "0501234567").
fn split_last(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    args.rsplit_once(char::is_whitespace)
        .map(|(rest, last)| (rest.trim_end(), last))
}

fn format_record(record: &Record) -> String {
    let phones = if record.phones.is_empty() {
        "(no phones)".into()
    } else {
        join_phones(record)
    };
    match &record.birthday {
        Some(birthday) => format!("{}: {} (birthday {})", record.name, phones, birthday),
        None => format!("{}: {}", record.name, phones),
    }
}

fn join_phones(record: &Record) -> String {
    record
        .phones
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn not_found(name: &str) {
    println!(
        "Error: {}",
        AbookError::ContactNotFound {
            name: name.to_string(),
        }
    );
}
