use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::tv::{
    AliasTable, CommandResult, ConnectivityResult, DeviceError, DiscoveryResult, SystemInfo,
    TvClient,
};

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One line summary of a dispatch outcome.
pub(super) fn describe_command(logical: &str, result: &CommandResult) -> String {
    if result.success {
        if result.command == logical {
            format!("✓ {}", logical)
        } else {
            format!("✓ {} (sent as {})", logical, result.command)
        }
    } else {
        let reason = result
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown error".to_string());
        format!("✗ {}: {}", logical, reason)
    }
}

pub(super) fn describe_connection(result: &ConnectivityResult) -> String {
    if !result.connected {
        let reason = result
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown error".to_string());
        let mut text = format!("✗ Not connected to {}: {}", result.address, reason);
        if let Some(DeviceError::Timeout { after, .. }) = &result.error {
            text.push_str(&format!(
                "\n  No reply within {}s. Check that the TV is switched on and on the same network.",
                after.as_secs_f32()
            ));
        }
        return text;
    }

    match &result.system {
        Some(info @ SystemInfo::Parsed { .. }) => format!(
            "✓ Connected to {}\n  Model:   {}\n  Version: {}",
            result.address,
            info.model().unwrap_or_default(),
            info.version().unwrap_or_default()
        ),
        Some(SystemInfo::Raw { body }) => format!(
            "✓ Connected to {} (unrecognised reply)\n  {}",
            result.address,
            body.trim()
        ),
        None => format!("✓ Connected to {}", result.address),
    }
}

pub async fn cmd_send(client: &TvClient, commands: &[String], json: bool) -> Result<bool> {
    let mut results = Vec::with_capacity(commands.len());

    for command in commands {
        let result = client.dispatch(command).await;
        if !json {
            println!("{}", describe_command(command, &result));
        }
        results.push(result);
    }

    if json {
        print_json(&results)?;
    }

    Ok(results.iter().all(|r| r.success))
}

pub async fn cmd_status(client: &TvClient, json: bool) -> Result<bool> {
    let result = client.probe().await;

    if json {
        print_json(&result)?;
    } else {
        println!("{}", describe_connection(&result));
    }

    Ok(result.connected)
}

pub async fn cmd_discover(client: &TvClient, json: bool) -> Result<bool> {
    let result: DiscoveryResult = client.discover().await;

    if json {
        print_json(&result)?;
        return Ok(result.success);
    }

    match (&result.commands, &result.error) {
        (Some(commands), _) => {
            println!("{} supported commands:", commands.len());
            for command in commands {
                match command {
                    Value::String(key) => println!("  {}", key),
                    other => println!("  {}", other),
                }
            }
        }
        (None, Some(error)) => eprintln!("Command discovery failed: {}", error),
        (None, None) => eprintln!("Command discovery failed."),
    }

    Ok(result.success)
}

pub fn cmd_aliases(aliases: &AliasTable, json: bool) -> Result<()> {
    if json {
        return print_json(aliases);
    }

    if aliases.is_empty() {
        println!("No aliases configured; commands are sent as typed.");
        return Ok(());
    }

    let width = aliases
        .entries()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0);
    for entry in aliases.entries() {
        println!(
            "{:width$}  {}",
            entry.name,
            entry.candidates.join(" → "),
            width = width
        );
    }
    println!("\nCommands not listed are sent as typed.");

    Ok(())
}
