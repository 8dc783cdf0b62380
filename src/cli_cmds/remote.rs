use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

use super::device_cmds::{describe_command, describe_connection};
use crate::tv::TvClient;

/// Buttons offered by the interactive remote: label and logical command.
const BUTTONS: &[(&str, &str)] = &[
    ("Power", "Standby"),
    ("Home", "Home"),
    ("Up", "CursorUp"),
    ("Down", "CursorDown"),
    ("Left", "CursorLeft"),
    ("Right", "CursorRight"),
    ("OK", "Confirm"),
    ("Back", "Back"),
    ("Options", "Options"),
    ("Source", "Source"),
    ("Volume +", "VolumeUp"),
    ("Volume -", "VolumeDown"),
    ("Mute", "Mute"),
    ("Channel +", "ChannelStepUp"),
    ("Channel -", "ChannelStepDown"),
    ("Play/Pause", "PlayPause"),
    ("Netflix", "Netflix"),
    ("YouTube", "YouTube"),
];

const QUIT_LABEL: &str = "Quit";

fn menu_items() -> Vec<String> {
    BUTTONS
        .iter()
        .map(|(label, command)| {
            if label == command {
                label.to_string()
            } else {
                format!("{label} ({command})")
            }
        })
        .chain(std::iter::once(QUIT_LABEL.to_string()))
        .collect()
}

/// Terminal remote: pick a button, see whether the TV took it.
pub async fn cmd_remote(client: &TvClient) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("\n📺 Philips TV remote ({})\n", client.address());
    println!("{}\n", describe_connection(&client.probe().await));

    let items = menu_items();
    let mut selected = 0;

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Button (Esc to quit)")
            .items(&items)
            .default(selected)
            .interact_opt()?;

        let Some(index) = choice else {
            break;
        };
        let Some(&(_, command)) = BUTTONS.get(index) else {
            break;
        };

        selected = index;
        let result = client.dispatch(command).await;
        println!("{}", describe_command(command, &result));
    }

    Ok(())
}
