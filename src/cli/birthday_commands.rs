use crate::cli::context::CLIContext;
use crate::error::AbookError;
use crate::queries::birthday_queries;

pub fn add_birthday(ctx: &mut CLIContext, args: &str) {
    let Some((name, date)) = split_last(args) else {
        println!("Usage: add-birthday <name> <DD.MM.YYYY>");
        return;
    };

    let Some(record) = ctx.book.find_mut(name) else {
        return not_found(name);
    };
    match record.set_birthday(date) {
        Ok(birthday) => println!("Birthday for contact {} added: {}", name, birthday),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show_birthday(ctx: &CLIContext, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Usage: show-birthday <name>");
        return;
    }

    match ctx.book.find(name) {
        Some(record) => match &record.birthday {
            Some(birthday) => println!(
                "Birthday for contact {}: {}",
                name,
                CLIContext::format_date(birthday.date())
            ),
            None => println!("No birthday found for contact {}", name),
        },
        None => not_found(name),
    }
}

pub fn birthdays(ctx: &CLIContext) {
    let upcoming = birthday_queries::upcoming_birthdays(&ctx.book, CLIContext::today());
    if upcoming.is_empty() {
        println!("No upcoming birthdays in the next week.");
        return;
    }

    println!("Upcoming birthdays in the next week:");
    for entry in &upcoming {
        println!(
            "  {} on {} (congratulate on {})",
            entry.name,
            CLIContext::format_date(entry.birthday),
            CLIContext::format_date(entry.congratulation)
        );
    }
}

fn split_last(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    args.rsplit_once(char::is_whitespace)
        .map(|(rest, last)| (rest.trim_end(), last))
}

fn not_found(name: &str) {
    println!(
        "Error: {}",
        AbookError::ContactNotFound {
            name: name.to_string(),
        }
    );
}
