use crate::cli::context::ShellContext;
use crate::error::ContactResult;
use crate::ops::contact_ops;
use crate::ops::DeleteOutcome;
use crate::queries::contact_queries::{self, Listing};
use crate::render;

pub fn add(ctx: &mut ShellContext) -> ContactResult<()> {
    let Some(name) = ctx.prompt_name("Enter a name: ") else {
        return Ok(());
    };
    let Some(email) = ctx.prompt_email("Enter an email: ") else {
        return Ok(());
    };
    let Some(number) = ctx.prompt_number("Enter a number(format +XXXXXXXXXX): ") else {
        return Ok(());
    };

    let contact = contact_ops::add_contact(ctx.store, ctx.checker, &name, &email, &number)?;
    ctx.print(&format!(
        "Contact added: {} {} {}",
        contact.name, contact.email, contact.number
    ));
    Ok(())
}

pub fn delete(ctx: &mut ShellContext) -> ContactResult<()> {
    if !has_contacts(ctx)? {
        return Ok(());
    }
    let Some(key) = ctx.prompt_non_empty("Enter a name to delete: ") else {
        return Ok(());
    };

    match contact_ops::delete_contact(ctx.store, &mut *ctx.console, &key)? {
        DeleteOutcome::Deleted(_) => ctx.print("Contact deleted."),
        DeleteOutcome::Cancelled(_) => ctx.print("Deletion canceled."),
    }
    Ok(())
}

pub fn search(ctx: &mut ShellContext) -> ContactResult<()> {
    if !has_contacts(ctx)? {
        return Ok(());
    }
    let Some(keyword) = ctx.prompt_non_empty("Enter name, email or number to search: ") else {
        return Ok(());
    };

    let matches = contact_queries::search(ctx.store, &keyword)?;
    ctx.print("Search results:");
    ctx.print(&render::render_contacts(&matches));
    Ok(())
}

pub fn list(ctx: &mut ShellContext) -> ContactResult<()> {
    match contact_queries::all_contacts(ctx.store)? {
        Listing::Empty => ctx.print("No contact found."),
        Listing::Contacts(contacts) => {
            ctx.print("All contacts:");
            ctx.print(&render::render_contacts(&contacts));
        }
    }
    Ok(())
}

pub fn update(ctx: &mut ShellContext) -> ContactResult<()> {
    if !has_contacts(ctx)? {
        return Ok(());
    }
    let Some(key) = ctx.prompt_non_empty("Enter a name to update: ") else {
        return Ok(());
    };

    contact_ops::update_contact(ctx.store, ctx.checker, &mut *ctx.console, &key)?;
    ctx.print("Contact updated.");
    Ok(())
}

/// Prints the empty-book notice and returns false when there is nothing to act on.
fn has_contacts(ctx: &mut ShellContext) -> ContactResult<bool> {
    if contact_queries::is_empty(ctx.store)? {
        ctx.print("No contact found.");
        return Ok(false);
    }
    Ok(true)
}
