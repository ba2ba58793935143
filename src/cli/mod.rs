use std::io::{Write, stdin, stdout};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::application::TellerService;
use crate::domain::{format_cents, parse_cents};

const MENU: &str = "\
================= Main Menu =================

[1]\tDeposit
[2]\tWithdraw
[3]\tStatement
[4]\tNew Account
[5]\tList Accounts
[6]\tNew User
[7]\tExit

=============================================";

/// Teller - Interactive Banking Console
#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "An interactive bank-teller console for a single session")]
#[command(version)]
pub struct Cli {
    /// Keep previous screens visible instead of clearing the terminal
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Run the menu loop until the user exits.
    ///
    /// Business rejections are printed and never end the loop; only real I/O
    /// failures on stdin/stdout propagate.
    pub fn run(self) -> Result<()> {
        let mut service = TellerService::new();

        loop {
            self.clear_screen()?;
            println!("{MENU}");
            let choice = prompt("Enter choice: ")?;
            self.clear_screen()?;

            match choice.trim().parse::<i32>() {
                Ok(1) => deposit(&mut service)?,
                Ok(2) => withdraw(&mut service)?,
                Ok(3) => statement(&service),
                Ok(4) => new_account(&mut service)?,
                Ok(5) => list_accounts(&service),
                Ok(6) => new_user(&mut service)?,
                Ok(7) => break,
                Ok(_) => println!("Invalid choice. Please try again."),
                Err(_) => println!("Invalid choice. Please enter a number."),
            }

            pause()?;
        }

        println!("Thank you, goodbye!");
        Ok(())
    }

    fn clear_screen(&self) -> Result<()> {
        if !self.no_clear {
            // ANSI: erase the display, then home the cursor
            print!("\x1B[2J\x1B[1;1H");
            stdout().flush().context("Failed to flush stdout")?;
        }
        Ok(())
    }
}

/// Write a label, flush, and read one line from stdin.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

fn pause() -> Result<()> {
    prompt("\nPress Enter to continue...")?;
    Ok(())
}

fn deposit(service: &mut TellerService) -> Result<()> {
    let line = prompt("Enter amount to deposit: ")?;
    let Ok(amount) = parse_cents(&line) else {
        println!("Invalid amount. Please enter a number.");
        return Ok(());
    };

    match service.deposit(amount) {
        Ok(entry) => println!("{entry}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn withdraw(service: &mut TellerService) -> Result<()> {
    let line = prompt("Enter amount to withdraw: ")?;
    let Ok(amount) = parse_cents(&line) else {
        println!("Invalid amount. Please enter a number.");
        return Ok(());
    };

    match service.withdraw(amount) {
        Ok(entry) => println!("{entry}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn statement(service: &TellerService) {
    println!("=============== Statement =================");
    if service.operations().is_empty() {
        println!("No operations to display.");
    } else {
        for operation in service.operations() {
            println!("{operation}");
        }
    }
    println!("\nBalance:\t${}", format_cents(service.balance()));
    println!("===========================================");
}

fn new_account(service: &mut TellerService) -> Result<()> {
    let tax_id = prompt("Enter tax id: ")?;

    match service.create_account(tax_id.trim()) {
        Ok(_) => println!("Account created successfully."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn list_accounts(service: &TellerService) {
    if service.accounts().is_empty() {
        println!("No accounts to display.");
        return;
    }

    for account in service.accounts() {
        println!("================= Account =================");
        println!("Owner:\t\t\t{}", account.owner);
        println!("Branch:\t\t\t{}", account.branch);
        println!("Account Number:\t\t{}", account.number);
        println!("===========================================\n");
    }
}

fn new_user(service: &mut TellerService) -> Result<()> {
    let tax_id = prompt("Enter tax id: ")?;
    let tax_id = tax_id.trim();
    // Checked up front so the user isn't asked for details that get thrown away
    if service.has_user(tax_id) {
        println!("User already exists.");
        return Ok(());
    }

    let name = prompt("Enter full name: ")?;
    let address = prompt("Enter full address: ")?;
    let birth_input = prompt("Enter date of birth (yyyy-mm-dd): ")?;
    let Ok(birth_date) = NaiveDate::parse_from_str(birth_input.trim(), "%Y-%m-%d") else {
        println!("Invalid date of birth. Use yyyy-mm-dd.");
        return Ok(());
    };

    match service.create_user(tax_id, name.trim(), address.trim(), birth_date) {
        Ok(_) => println!("User created successfully."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
