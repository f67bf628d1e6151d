//! Menu loop: prompt, read, dispatch to the register, print.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use cashreg_core::{DomainError, ItemId, Quantity};
use cashreg_register::Register;

use crate::args::OutputFormat;
use crate::input::{Input, Tokens};
use crate::table;

/// Menu entries, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    InsertItems,
    RemoveItem,
    ListItems,
    Sell,
    SalesHistory,
    SortedSalesHistory,
    Summary,
}

impl MenuCommand {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::InsertItems),
            2 => Some(Self::RemoveItem),
            3 => Some(Self::ListItems),
            4 => Some(Self::Sell),
            5 => Some(Self::SalesHistory),
            6 => Some(Self::SortedSalesHistory),
            7 => Some(Self::Summary),
            _ => None,
        }
    }
}

const MENU: &str = "\
1. Insert Items
2. Remove an Item
3. Display a list of items
4. Register a sale
5. Display sales history
6. Sort and display sales history table
7. Display summary
q. Quit";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One operator answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer<T> {
    Value(T),
    /// Parsed but out of range; the command is abandoned.
    Rejected,
    /// Operator quit or input ended.
    Stop,
}

/// Drives one [`Register`] session from a token stream to an output sink.
pub struct Driver<R, W> {
    register: Register,
    input: Tokens<R>,
    out: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    pub fn new(register: Register, input: R, out: W) -> Self {
        Self {
            register,
            input: Tokens::new(input),
            out,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Hand back the session and the output sink once the loop is done.
    pub fn into_parts(self) -> (Register, W) {
        (self.register, self.out)
    }

    /// Run until the operator quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            self.out.flush()?;

            let command = match self.input.next_input(&mut self.out)? {
                Input::Quit | Input::Eof => break,
                Input::Number(n) => MenuCommand::from_number(n),
            };
            let Some(command) = command else {
                writeln!(self.out, "Invalid input")?;
                continue;
            };
            if self.dispatch(command)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()?;
        tracing::debug!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, command: MenuCommand) -> io::Result<Flow> {
        match command {
            MenuCommand::InsertItems => self.insert_items(),
            MenuCommand::RemoveItem => self.remove_item(),
            MenuCommand::ListItems => {
                let rows = self.register.items();
                self.emit(&rows, |out, rows| table::write_items(out, rows))?;
                Ok(Flow::Continue)
            }
            MenuCommand::Sell => self.sell(),
            MenuCommand::SalesHistory => {
                let rows = self.register.sales();
                self.emit(&rows, |out, rows| table::write_sales(out, "Sales History:", rows))?;
                Ok(Flow::Continue)
            }
            MenuCommand::SortedSalesHistory => {
                let rows = self.register.sorted_sales();
                self.emit(&rows, |out, rows| {
                    table::write_sales(out, "Sorted Sales Table:", rows)
                })?;
                Ok(Flow::Continue)
            }
            MenuCommand::Summary => {
                let summary = self.register.summary();
                self.emit(&summary, |out, summary| table::write_summary(out, summary))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn insert_items(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "How many items do you want to add? ")?;
        let count = match self.read_u32()? {
            Answer::Value(count) => count,
            Answer::Rejected => return Ok(Flow::Continue),
            Answer::Stop => return Ok(Flow::Quit),
        };
        match self.register.insert_items(count) {
            Ok(_) => writeln!(self.out, "Items added!")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Please enter the item ID of the item you want to remove: ")?;
        let id = match self.read_item_id()? {
            Answer::Value(id) => id,
            Answer::Rejected => return Ok(Flow::Continue),
            Answer::Stop => return Ok(Flow::Quit),
        };
        match self.register.remove_item(id) {
            Ok(_) => writeln!(self.out, "Item removed!")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn sell(&mut self) -> io::Result<Flow> {
        writeln!(self.out, "Please enter the item ID and quantity to sell: ")?;
        let id = self.read_item_id()?;
        let quantity = self.read_u32()?;
        let (id, quantity) = match (id, quantity) {
            (Answer::Value(id), Answer::Value(quantity)) => (id, Quantity::new(quantity)),
            (Answer::Stop, _) | (_, Answer::Stop) => return Ok(Flow::Quit),
            _ => return Ok(Flow::Continue),
        };
        match self.register.sell(id, quantity) {
            Ok(_) => writeln!(self.out, "Item sold!")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn read_u32(&mut self) -> io::Result<Answer<u32>> {
        match self.input.next_input(&mut self.out)? {
            Input::Quit | Input::Eof => Ok(Answer::Stop),
            Input::Number(n) => match u32::try_from(n) {
                Ok(value) => Ok(Answer::Value(value)),
                Err(_) => {
                    writeln!(self.out, "Invalid input")?;
                    Ok(Answer::Rejected)
                }
            },
        }
    }

    fn read_item_id(&mut self) -> io::Result<Answer<ItemId>> {
        Ok(match self.read_u32()? {
            Answer::Value(raw) => match ItemId::new(raw) {
                Ok(id) => Answer::Value(id),
                Err(err) => {
                    writeln!(self.out, "Error: {err}")?;
                    Answer::Rejected
                }
            },
            Answer::Rejected => Answer::Rejected,
            Answer::Stop => Answer::Stop,
        })
    }

    fn report(&mut self, err: &DomainError) -> io::Result<()> {
        match err {
            DomainError::ItemNotFound(_) => writeln!(self.out, "Could not find item!"),
            DomainError::InsufficientStock { available, .. } => writeln!(
                self.out,
                "Failed to sell specified amount! Only {available} available."
            ),
            DomainError::CapacityExceeded { capacity } => writeln!(
                self.out,
                "Sales ledger is full ({capacity} sales recorded)!"
            ),
            other => writeln!(self.out, "Error: {other}"),
        }
    }

    fn emit<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        text: impl FnOnce(&mut W, &T) -> io::Result<()>,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => text(&mut self.out, value),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, value).map_err(io::Error::from)?;
                writeln!(self.out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_commands() {
        assert_eq!(MenuCommand::from_number(1), Some(MenuCommand::InsertItems));
        assert_eq!(MenuCommand::from_number(6), Some(MenuCommand::SortedSalesHistory));
        assert_eq!(MenuCommand::from_number(7), Some(MenuCommand::Summary));
        assert_eq!(MenuCommand::from_number(0), None);
        assert_eq!(MenuCommand::from_number(-1), None);
    }
}
