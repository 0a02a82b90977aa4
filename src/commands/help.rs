use poise::builtins::HelpConfiguration;

use crate::commands::context::Context;
use crate::error::Result;

/// Show the list of commands or the help for one of them
#[poise::command(prefix_command, track_edits, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to get help for"]
    #[rest]
    command: Option<String>,
) -> Result<()> {
    let extra_text = format!(
        "Type {}help <command> for more info on a command.",
        ctx.data().config.prefix
    );
    let configuration = HelpConfiguration {
        extra_text_at_bottom: &extra_text,
        ..Default::default()
    };

    poise::builtins::help(ctx, command.as_deref(), configuration).await?;
    Ok(())
}
