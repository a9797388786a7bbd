//! Line dispatch for the pay-later command grammar.
//!
//! Results print to stdout, one line per command; errors are reported to the
//! caller and never stop the loop.

use thiserror::Error;

use crate::cli::core::{LoopControl, ShellContext};
use crate::core::services::{MerchantService, ReportService, TransferService, UserService};
use crate::errors::LedgerError;
use crate::money::{DiscountRate, Money};

/// A command that could not run: either the ledger refused it or the line
/// did not parse.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Usage(String),
}

pub(crate) fn dispatch(
    context: &mut ShellContext,
    tokens: &[String],
) -> Result<LoopControl, CommandError> {
    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["new", "user", rest @ ..] => create_user(context, rest)?,
        ["new", "merchant", rest @ ..] => create_merchant(context, rest)?,
        ["new", "txn", rest @ ..] => create_purchase(context, rest)?,
        ["update", "merchant", rest @ ..] => update_merchant(context, rest)?,
        ["payback", rest @ ..] => payback(context, rest)?,
        ["report", "discount", rest @ ..] => report_discount(context, rest)?,
        ["report", "dues", rest @ ..] => report_dues(context, rest)?,
        ["report", "users-at-credit-limit"] => report_users_at_credit_limit(context),
        ["report", "total-dues"] => println!("{}", ReportService::total_dues(&context.store)),
        ["exit"] => return Ok(LoopControl::Exit),
        _ => {
            return Err(CommandError::Usage(format!(
                "unknown command: {}",
                tokens.join(" ")
            )))
        }
    }
    Ok(LoopControl::Continue)
}

fn create_user(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [name, email, limit] = take_args(args, "new user <name> <email> <credit-limit>")?;
    let limit = Money::parse(limit)?;
    let user = UserService::create(&mut context.store, name, email, limit)?;
    println!("{}({})", user.name, user.credit_limit);
    Ok(())
}

fn create_merchant(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [name, email, percent] = take_args(args, "new merchant <name> <email> <discount>%")?;
    let rate = DiscountRate::from_percent(percent)?;
    let merchant = MerchantService::create(&mut context.store, name, email, rate)?;
    println!("{}({})", merchant.name, merchant.discount_rate);
    Ok(())
}

fn create_purchase(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [user, merchant, amount] = take_args(args, "new txn <user> <merchant> <amount>")?;
    let amount = Money::parse(amount)?;
    TransferService::purchase(&mut context.store, user, merchant, amount)?;
    println!("success!");
    Ok(())
}

fn update_merchant(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [name, percent] = take_args(args, "update merchant <name> <discount>%")?;
    let rate = DiscountRate::from_percent(percent)?;
    MerchantService::set_discount_rate(&mut context.store, name, rate)?;
    println!("success!");
    Ok(())
}

fn payback(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [user, amount] = take_args(args, "payback <user> <amount>")?;
    let amount = Money::parse(amount)?;
    TransferService::payback(&mut context.store, user, amount)?;
    println!("success!");
    Ok(())
}

fn report_discount(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [merchant] = take_args(args, "report discount <merchant>")?;
    println!("{}", ReportService::total_discount(&context.store, merchant));
    Ok(())
}

fn report_dues(context: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [user] = take_args(args, "report dues <user>")?;
    println!("{}", ReportService::dues_for_user(&context.store, user)?);
    Ok(())
}

fn report_users_at_credit_limit(context: &ShellContext) {
    for name in ReportService::users_at_credit_limit(&context.store) {
        println!("{name}");
    }
}

fn take_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &str,
) -> Result<[&'a str; N], CommandError> {
    <[&'a str; N]>::try_from(args).map_err(|_| CommandError::Usage(format!("usage: {usage}")))
}
