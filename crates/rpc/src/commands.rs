//! CLI commands

use std::path::Path;

use cinder_core::{AccountId, Amount};
use cinder_ledger::LedgerError;
use serde::Deserialize;

use crate::context::AppContext;

/// One operation in a script file
///
/// Scripts are JSON arrays of tagged operations; amounts are base units.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum ScriptOp {
    Transfer {
        from: String,
        to: String,
        amount: u128,
    },
    Approve {
        owner: String,
        spender: String,
        amount: u128,
    },
    TransferFrom {
        spender: String,
        owner: String,
        to: String,
        amount: u128,
    },
    Balance {
        account: String,
    },
    Supply,
}

/// Print token metadata and genesis parameters
pub fn info(ctx: &AppContext) {
    let ledger = &ctx.ledger;
    println!("Token:    {} ({})", ledger.name(), ledger.symbol());
    println!("Decimals: {}", ledger.decimals());
    println!("Supply:   {} base units", ledger.total_supply());
    println!("Deployer: {}", ctx.deployer());
}

/// Print the balance of one account
pub fn balance(ctx: &AppContext, account: &str) {
    let account = AccountId::new(account);
    println!(
        "Balance for {}: {} {}",
        account,
        ctx.ledger.balance_of(&account),
        ctx.ledger.symbol()
    );
}

/// Apply one script operation, reporting the outcome on the console.
///
/// Ledger precondition failures are deterministic, so they are printed
/// and the script continues; only host-level problems abort.
pub fn apply(ctx: &mut AppContext, op: &ScriptOp) {
    let outcome = match op {
        ScriptOp::Transfer { from, to, amount } => describe(
            format!("Transfer {from} -> {to}: {amount}"),
            ctx.ledger.transfer(
                &AccountId::new(from.as_str()),
                &AccountId::new(to.as_str()),
                Amount::new(*amount),
            ),
        ),
        ScriptOp::Approve {
            owner,
            spender,
            amount,
        } => describe(
            format!("Approve {owner} -> {spender}: {amount}"),
            ctx.ledger.approve(
                &AccountId::new(owner.as_str()),
                &AccountId::new(spender.as_str()),
                Amount::new(*amount),
            ),
        ),
        ScriptOp::TransferFrom {
            spender,
            owner,
            to,
            amount,
        } => describe(
            format!("TransferFrom {owner} -> {to} (by {spender}): {amount}"),
            ctx.ledger.transfer_from(
                &AccountId::new(spender.as_str()),
                &AccountId::new(owner.as_str()),
                &AccountId::new(to.as_str()),
                Amount::new(*amount),
            ),
        ),
        ScriptOp::Balance { account } => {
            balance(ctx, account);
            return;
        }
        ScriptOp::Supply => {
            println!("Total supply: {} base units", ctx.ledger.total_supply());
            return;
        }
    };
    println!("{outcome}");
}

fn describe(action: String, result: Result<(), LedgerError>) -> String {
    match result {
        Ok(()) => format!("✅ {action}"),
        Err(err) => format!("❌ {action}: {err}"),
    }
}

/// Execute a JSON script of ledger operations
pub async fn run_script(ctx: &mut AppContext, path: &Path) -> Result<(), anyhow::Error> {
    let raw = tokio::fs::read_to_string(path).await?;
    let ops: Vec<ScriptOp> = serde_json::from_str(&raw)?;

    tracing::info!(script = %path.display(), ops = ops.len(), "running script");
    for op in &ops {
        apply(ctx, op);
    }

    audit(ctx);
    Ok(())
}

/// Run a built-in demonstration scenario
pub fn demo(ctx: &mut AppContext) {
    let deployer = ctx.deployer().clone();

    println!(
        "Ledger {} ({}) deployed, {} base units to {}",
        ctx.ledger.name(),
        ctx.ledger.symbol(),
        ctx.ledger.total_supply(),
        deployer
    );

    let ops = [
        ScriptOp::Transfer {
            from: deployer.as_str().to_string(),
            to: "alice".to_string(),
            amount: 2000,
        },
        ScriptOp::Transfer {
            from: "alice".to_string(),
            to: "bob".to_string(),
            amount: 500,
        },
        ScriptOp::Approve {
            owner: "alice".to_string(),
            spender: "bob".to_string(),
            amount: 1000,
        },
        ScriptOp::TransferFrom {
            spender: "bob".to_string(),
            owner: "alice".to_string(),
            to: "carol".to_string(),
            amount: 1000,
        },
        // fails: mallory holds nothing
        ScriptOp::Transfer {
            from: "mallory".to_string(),
            to: "alice".to_string(),
            amount: 3000,
        },
        ScriptOp::Balance {
            account: "alice".to_string(),
        },
        ScriptOp::Balance {
            account: "bob".to_string(),
        },
        ScriptOp::Balance {
            account: "carol".to_string(),
        },
        ScriptOp::Supply,
    ];

    for op in &ops {
        apply(ctx, op);
    }

    audit(ctx);
}

fn audit(ctx: &AppContext) {
    if ctx.ledger.is_conserved() {
        println!("✅ Conservation verified (sum of balances == total supply)");
    } else {
        println!("❌ Conservation violated");
    }
}
