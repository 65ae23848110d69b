pub mod context;
pub mod contact_commands;

use tracing::error;

use crate::config::Config;
use crate::console::{Console, StdConsole};
use crate::db::{CsvTableStore, TableStore};
use crate::email::{EmailChecker, SyntaxChecker};
use crate::error::{ContactError, ContactResult};
use context::ShellContext;

const RULE: &str = "------------------------------";

/// Run the interactive menu against the configured table file.
pub fn run(config: &Config) -> ContactResult<()> {
    let store = CsvTableStore::from_config(config);
    store.ensure_initialized()?;
    run_shell(&store, &SyntaxChecker, &mut StdConsole)
}

/// The menu loop. Returns on Exit, end of input, or a storage failure.
pub fn run_shell(
    store: &dyn TableStore,
    checker: &dyn EmailChecker,
    console: &mut dyn Console,
) -> ContactResult<()> {
    let mut ctx = ShellContext::new(store, checker, console);
    ctx.print("Welcome to Contact Book");

    loop {
        print_menu(&mut ctx);

        let choice = match ctx.console.read_line("Choose an action: ") {
            Some(choice) => choice,
            None => break,
        };

        let result = match choice.trim() {
            "1" => contact_commands::add(&mut ctx),
            "2" => contact_commands::delete(&mut ctx),
            "3" => contact_commands::search(&mut ctx),
            "4" => contact_commands::list(&mut ctx),
            "5" => contact_commands::update(&mut ctx),
            "0" => break,
            _ => {
                ctx.print("Invalid option. Try again");
                continue;
            }
        };

        if let Err(e) = result {
            if e.is_storage_failure() {
                error!(error = %e, "contact table unavailable");
                return Err(e);
            }
            report(&mut ctx, &e);
        }
    }

    ctx.print("Goodbye");
    Ok(())
}

fn print_menu(ctx: &mut ShellContext) {
    ctx.print(RULE);
    ctx.print("1. Add contact.");
    ctx.print("2. Delete contact.");
    ctx.print("3. Search contact.");
    ctx.print("4. Load all contacts.");
    ctx.print("5. Update contact.");
    ctx.print("0. Exit.");
    ctx.print(RULE);
}

fn report(ctx: &mut ShellContext, e: &ContactError) {
    match e {
        ContactError::NotFound { .. } => ctx.print("Contact not found."),
        ContactError::DuplicateContact { .. } => {
            ctx.print("Contact with this name/email/number already exists.")
        }
        other => ctx.print(&format!("Error: {}", other)),
    }
}
