use crate::console::Console;
use crate::db::TableStore;
use crate::email::EmailChecker;
use crate::error::ContactResult;
use crate::validation;

/// Collaborators shared by every shell command.
pub struct ShellContext<'a> {
    pub store: &'a dyn TableStore,
    pub checker: &'a dyn EmailChecker,
    pub console: &'a mut dyn Console,
}

impl<'a> ShellContext<'a> {
    pub fn new(
        store: &'a dyn TableStore,
        checker: &'a dyn EmailChecker,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            store,
            checker,
            console,
        }
    }

    pub fn print(&mut self, text: &str) {
        self.console.print(text);
    }

    /// Re-prompt until the answer is non-blank. None on end of input.
    pub fn prompt_non_empty(&mut self, prompt: &str) -> Option<String> {
        prompt_valid(&mut *self.console, prompt, |s| validation::non_blank(s, "value"))
    }

    pub fn prompt_name(&mut self, prompt: &str) -> Option<String> {
        prompt_valid(&mut *self.console, prompt, validation::validate_name)
    }

    pub fn prompt_email(&mut self, prompt: &str) -> Option<String> {
        let checker = self.checker;
        prompt_valid(&mut *self.console, prompt, |s| validation::validate_email(s, checker))
    }

    pub fn prompt_number(&mut self, prompt: &str) -> Option<String> {
        prompt_valid(&mut *self.console, prompt, validation::validate_number)
    }
}

fn prompt_valid(
    console: &mut dyn Console,
    prompt: &str,
    validate: impl Fn(&str) -> ContactResult<String>,
) -> Option<String> {
    loop {
        let input = console.read_line(prompt)?;
        match validate(&input) {
            Ok(value) => return Some(value),
            Err(e) => console.print(&e.user_message()),
        }
    }
}
