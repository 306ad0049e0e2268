// ABOUTME: Demo driver - one producer and one consumer over a shared account.
// ABOUTME: Prints the account's event stream until interrupted with Ctrl-C.

use std::sync::Arc;

use anyhow::Result;

use till::prelude::*;

/// Render the event stream as the classic three-column teller table:
/// producer activity on the left, consumer activity in the middle, balance
/// on the right.
async fn print_events(mut events: tokio::sync::mpsc::UnboundedReceiver<AccountEvent>) {
    println!("{:<24}{:<24}{}", "Producer", "Consumer", "Balance");
    while let Some(event) = events.recv().await {
        match event {
            AccountEvent::Deposit { amount, balance } => {
                println!("{:<24}{:<24}{}", format!("deposit {}", amount), "", balance);
            }
            AccountEvent::WithdrawWaiting { .. } => {
                println!("{:<24}{:<24}", "", "wait for deposit");
            }
            AccountEvent::Withdraw { amount, balance } => {
                println!("{:<24}{:<24}{}", "", format!("withdraw {}", amount), balance);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let account = Arc::new(Account::new());
    let printer = tokio::spawn(print_events(account.subscribe().await));

    let config = ActorConfig::default();
    let actors: Vec<Box<dyn Actor>> = vec![
        Box::new(Producer::new(Arc::clone(&account), config.clone())),
        Box::new(Consumer::new(Arc::clone(&account), config)),
    ];

    let shutdown = Shutdown::new();
    let mut handles = Vec::new();
    for actor in actors {
        let signal = shutdown.clone();
        handles.push(tokio::spawn(async move { actor.run(signal).await }));
    }

    // Block until interrupted, then signal both actors and join them.
    tokio::signal::ctrl_c().await?;
    shutdown.cancel();

    for handle in handles {
        match handle.await? {
            Ok(report) => println!("{}", serde_json::to_string(&report)?),
            Err(e) => eprintln!("actor failed: {}", e),
        }
    }

    // Dropping the account ends the event stream and lets the printer finish.
    drop(account);
    printer.await?;
    Ok(())
}
