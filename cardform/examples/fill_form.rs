//! Drive the payment form from stdin, one field per line.
//!
//! Usage:
//!   RUST_LOG=info cargo run -p cardform --example fill_form
//!
//! Lines are `<field> <text>` where field is one of `type`, `name`,
//! `number`, `cvc`, `expiry`; `submit` confirms the form.

use std::io::{self, BufRead};

use anyhow::{Context, bail};
use cardform::prelude::*;

fn field_for(name: &str) -> anyhow::Result<FieldId> {
    Ok(match name {
        "type" => FieldId::CardType,
        "name" => FieldId::Cardholder,
        "number" => FieldId::CardNumber,
        "cvc" => FieldId::Cvc,
        "expiry" => FieldId::ExpiryDate,
        other => bail!("unknown field {other:?}"),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut form = PaymentFormBuilder::new().build()?;
    let mut sink = LogSink::new();

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "submit" {
            match form.submit(&mut sink) {
                Ok(_) => println!("submitted"),
                Err(e) => println!("not submitted: {e}"),
            }
            continue;
        }

        let (name, text) = line.split_once(' ').unwrap_or((line, ""));
        let field = match field_for(name) {
            Ok(f) => f,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        form.focus(field);
        let filtered: String = text
            .chars()
            .filter(|&c| form.key(field, Key::Char(c)))
            .collect();
        if let Err(e) = form.input(field, &filtered) {
            println!("{field}: {e}");
        }
        form.blur(field);

        let v = form.validation(field);
        println!(
            "{field}: {:?} -> {} {}",
            form.display(field),
            if v.valid { "ok" } else { "invalid" },
            v.helper_text.trim()
        );
        println!("confirm enabled: {}", form.is_valid());
    }
    Ok(())
}
