//! `storybook generate`.

use super::commands::GenerateArgs;
use std::io::Read;
use std::sync::Arc;
use storybook::{HttpStoryTransport, PresentationController, SubmitOutcome, TerminalAlerts};
use tracing::{debug, warn};

/// Submit journal text to a running endpoint and print the story.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let weeks = read_weeks(&args)?;

    let transport = Arc::new(HttpStoryTransport::new(&args.endpoint));
    debug!(url = transport.url(), weeks = weeks.len(), "Submitting journal");
    let mut controller = PresentationController::new(transport, Arc::new(TerminalAlerts::stderr()));

    for (index, text) in weeks.into_iter().enumerate() {
        if index > 0 {
            controller.form_mut().add_week();
        }
        controller.form_mut().set_week(index, text)?;
    }
    if controller.form().is_blank() {
        warn!("Journal is empty; asking for a story anyway");
    }

    match controller.submit().await {
        SubmitOutcome::Story(story) => {
            println!("{}", story);
            Ok(())
        }
        SubmitOutcome::Failed(message) => Err(anyhow::anyhow!(message)),
        SubmitOutcome::Ignored => Err(anyhow::anyhow!("Submission was not sent")),
    }
}

fn read_weeks(args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    if args.files.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(vec![text]);
    }

    args.files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
        })
        .collect()
}
