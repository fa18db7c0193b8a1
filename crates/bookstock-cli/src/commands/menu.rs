//! Interactive numbered menu.
//!
//! Every action is one `Inventory` call. Failures are printed and the loop
//! carries on; only exhausted input or option 9 ends the session.

use std::io::{self, Write};

use bookstock_core::{BookDraft, BookStore, ErrorReport, Inventory};

use crate::app::AppContext;
use crate::errors::CliError;
use crate::output::{render_book_detail, render_book_list, render_stats};
use crate::ui::prompt::{LinePrompter, Prompter, TerminalPrompter};
use crate::ui::render::error_message;
use crate::ui::{badge, divider, format_price, header, Badge, UiContext};

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    UpdateQuantity,
    UpdatePrice,
    Search,
    ListAll,
    ListByGenre,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Add,
        MenuChoice::Remove,
        MenuChoice::UpdateQuantity,
        MenuChoice::UpdatePrice,
        MenuChoice::Search,
        MenuChoice::ListAll,
        MenuChoice::ListByGenre,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parse a typed option number.
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a new book",
            MenuChoice::Remove => "Remove a book",
            MenuChoice::UpdateQuantity => "Update quantity",
            MenuChoice::UpdatePrice => "Update price",
            MenuChoice::Search => "Search books",
            MenuChoice::ListAll => "Show full inventory",
            MenuChoice::ListByGenre => "Show books by genre",
            MenuChoice::Statistics => "Show statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Whether the session keeps reading after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let mut inventory = ctx.open_inventory()?;
    let ui = ctx.ui(false)?;
    let currency = ctx.currency()?;

    if ui.is_interactive() {
        MenuSession::new(
            &mut inventory,
            TerminalPrompter::default(),
            io::stdout(),
            &ui,
            currency,
        )
        .run()?;
    } else {
        let stdin = io::stdin();
        MenuSession::new(
            &mut inventory,
            LinePrompter::new(stdin.lock(), io::stdout()),
            io::stdout(),
            &ui,
            currency,
        )
        .run()?;
    }

    inventory.close().map_err(CliError::from)?;
    Ok(())
}

/// A menu loop over one inventory, prompter and output sink.
pub struct MenuSession<'a, S: BookStore, P: Prompter, W: Write> {
    inventory: &'a mut Inventory<S>,
    prompter: P,
    out: W,
    ui: &'a UiContext,
    currency: &'a str,
}

impl<'a, S: BookStore, P: Prompter, W: Write> MenuSession<'a, S, P, W> {
    pub fn new(
        inventory: &'a mut Inventory<S>,
        prompter: P,
        out: W,
        ui: &'a UiContext,
        currency: &'a str,
    ) -> Self {
        Self {
            inventory,
            prompter,
            out,
            ui,
            currency,
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompter.ask("Choose an option (1-9)")? else {
                break;
            };
            let step = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Exit) => Step::Quit,
                Some(choice) => self.dispatch(choice)?,
                None => {
                    let msg = badge(self.ui, Badge::Warn, "Please enter a number from 1 to 9");
                    self.line(&msg)?;
                    Step::Continue
                }
            };
            if step == Step::Quit {
                break;
            }
        }
        self.line("Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", header(self.ui, "menu", None))?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label())?;
        }
        writeln!(self.out, "{}", divider(self.ui))?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Step> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::UpdateQuantity => self.update_quantity(),
            MenuChoice::UpdatePrice => self.update_price(),
            MenuChoice::Search => self.search(),
            MenuChoice::ListAll => self.list_all(),
            MenuChoice::ListByGenre => self.list_by_genre(),
            MenuChoice::Statistics => self.statistics(),
            MenuChoice::Exit => Ok(Step::Quit),
        }
    }

    fn add(&mut self) -> anyhow::Result<Step> {
        let Some([id, title, author, quantity, price, genre]) = self.answers([
            "Book ID",
            "Title",
            "Author",
            "Quantity in stock",
            "Price",
            "Genre (optional)",
        ])?
        else {
            return Ok(Step::Quit);
        };

        let mut draft = BookDraft::new(id, title, author, quantity, price);
        if !genre.trim().is_empty() {
            draft = draft.genre(genre);
        }
        match self.inventory.add_book(&draft) {
            Ok(book) => self.success(&format!("Added \"{}\" (ID {})", book.title, book.id))?,
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn remove(&mut self) -> anyhow::Result<Step> {
        let Some([id]) = self.answers(["Book ID to remove"])? else {
            return Ok(Step::Quit);
        };
        let book = match self.inventory.get_book(&id) {
            Ok(book) => book,
            Err(report) => {
                self.failure(&report)?;
                return Ok(Step::Continue);
            }
        };

        let detail = render_book_detail(self.ui, &book, self.currency);
        self.line(&detail)?;
        let Some(confirmed) = self
            .prompter
            .confirm(&format!("Remove \"{}\"?", book.title))?
        else {
            return Ok(Step::Quit);
        };
        if !confirmed {
            let msg = badge(self.ui, Badge::Info, "Removal cancelled");
            self.line(&msg)?;
            return Ok(Step::Continue);
        }

        match self.inventory.remove_book(&id) {
            Ok(book) => self.success(&format!("Removed \"{}\"", book.title))?,
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn update_quantity(&mut self) -> anyhow::Result<Step> {
        let Some([id]) = self.answers(["Book ID"])? else {
            return Ok(Step::Quit);
        };
        let current = match self.inventory.get_book(&id) {
            Ok(book) => book,
            Err(report) => {
                self.failure(&report)?;
                return Ok(Step::Continue);
            }
        };
        self.line(&format!(
            "{} (current stock: {})",
            current.title, current.quantity
        ))?;

        let Some([quantity]) = self.answers(["New quantity"])? else {
            return Ok(Step::Quit);
        };
        match self.inventory.set_quantity(&id, &quantity) {
            Ok(book) => self.success(&format!("Quantity updated to {}", book.quantity))?,
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn update_price(&mut self) -> anyhow::Result<Step> {
        let Some([id]) = self.answers(["Book ID"])? else {
            return Ok(Step::Quit);
        };
        let current = match self.inventory.get_book(&id) {
            Ok(book) => book,
            Err(report) => {
                self.failure(&report)?;
                return Ok(Step::Continue);
            }
        };
        self.line(&format!(
            "{} (current price: {})",
            current.title,
            format_price(current.price, self.currency)
        ))?;

        let Some([price]) = self.answers(["New price"])? else {
            return Ok(Step::Quit);
        };
        match self.inventory.set_price(&id, &price) {
            Ok(book) => self.success(&format!(
                "Price updated to {}",
                format_price(book.price, self.currency)
            ))?,
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn search(&mut self) -> anyhow::Result<Step> {
        let Some([term]) = self.answers(["Title, author or ID"])? else {
            return Ok(Step::Quit);
        };
        let empty = format!("No books match \"{}\"", term.trim());
        match self.inventory.find_books(&term) {
            Ok(books) => {
                let listing = render_book_list(self.ui, &books, self.currency, &empty);
                self.line(&listing)?;
            }
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn list_all(&mut self) -> anyhow::Result<Step> {
        match self.inventory.list_all() {
            Ok(books) => {
                let listing =
                    render_book_list(self.ui, &books, self.currency, "The inventory is empty");
                self.line(&listing)?;
            }
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn list_by_genre(&mut self) -> anyhow::Result<Step> {
        let Some([genre]) = self.answers(["Genre (blank for books without one)"])? else {
            return Ok(Step::Quit);
        };
        let empty = if genre.trim().is_empty() {
            "No books without a genre".to_string()
        } else {
            format!("No books in genre {}", genre.trim())
        };
        match self.inventory.list_by_genre(&genre) {
            Ok(books) => {
                let listing = render_book_list(self.ui, &books, self.currency, &empty);
                self.line(&listing)?;
            }
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    fn statistics(&mut self) -> anyhow::Result<Step> {
        match self.inventory.statistics() {
            Ok(stats) => {
                let block = render_stats(self.ui, &stats, self.currency);
                self.line(&block)?;
            }
            Err(report) => self.failure(&report)?,
        }
        Ok(Step::Continue)
    }

    /// Ask each label in turn; `None` if input runs out part way.
    fn answers<const N: usize>(
        &mut self,
        labels: [&str; N],
    ) -> anyhow::Result<Option<[String; N]>> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, label) in answers.iter_mut().zip(labels) {
            match self.prompter.ask(label)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn line(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> anyhow::Result<()> {
        let msg = badge(self.ui, Badge::Ok, message);
        self.line(&msg)
    }

    fn failure(&mut self, report: &ErrorReport) -> anyhow::Result<()> {
        let msg = error_message(self.ui, &report.message, None);
        self.line(&msg)
    }
}
