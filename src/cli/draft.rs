use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::cli::{self, Context};
use crate::display::print_markdown;
use crate::error::{KdcliError, Result};
use crate::payload::{DraftContent, PayloadBuilder, PublishDay};
use crate::renderer::{DraftView, Renderer};
use crate::services::{DraftReconciler, PhotoLister, Reconciliation};

/// Flags of the `draft` command
pub struct DraftOptions {
    pub create: bool,
    pub today: bool,
    pub date: Option<String>,
    pub message: Option<String>,
    pub pick_up_person: Option<String>,
    pub food_menu: Option<String>,
    pub use_last_photos: usize,
    pub dry_run: bool,
}

/// List drafts, or build a draft and create/update it remotely
pub fn run(ctx: &Context, options: DraftOptions) -> Result<()> {
    let session = ctx.session()?;
    cli::print_login(&session);
    let child_id = session.child_id()?;
    let builder = PayloadBuilder::from_config(&ctx.config)?;
    let renderer = Renderer::new(builder.zone());
    let reconciler = DraftReconciler::new(&ctx.api, child_id, &session.user_token);

    let payload = if options.create {
        let day = publish_day(options.today, options.date.as_deref())?;
        let date = day.resolve(Utc::now(), builder.zone());

        let photos = PhotoLister::new(&ctx.api, &session.user_token)
            .last_n_photos(options.use_last_photos)?;

        let defaults = &ctx.config.defaults;
        let content = DraftContent {
            message: unescape_newlines(options.message.as_deref().unwrap_or(&defaults.message)),
            food_menu: options
                .food_menu
                .unwrap_or_else(|| defaults.food_menu.clone()),
            pick_up_person: options
                .pick_up_person
                .unwrap_or_else(|| defaults.pick_up_person.clone()),
            photos,
        };

        let payload = builder.build(
            child_id.clone(),
            &session.user_token,
            date,
            content,
            &mut rand::thread_rng(),
        );
        tracing::debug!(%date, payload = ?payload, "draft built");

        if options.dry_run {
            print_markdown(&renderer.render_payload(&payload));
            return Ok(());
        }
        Some(payload)
    } else {
        None
    };

    match reconciler.create_or_update(payload)? {
        Reconciliation::Listed(drafts) => {
            let mut views = Vec::with_capacity(drafts.len());
            for summary in drafts {
                let detail = match reconciler.draft_detail(&summary.draft_id) {
                    Ok(detail) => detail,
                    Err(e) => {
                        tracing::warn!(draft_id = %summary.draft_id, error = %e, "draft content unavailable");
                        Value::Null
                    }
                };
                views.push(DraftView { summary, detail });
            }
            print_markdown(&renderer.render_drafts(&views));
        }
        Reconciliation::Created => println!("Draft created."),
        Reconciliation::Updated { draft_id } => println!("Draft {} updated.", draft_id),
    }

    Ok(())
}

fn publish_day(today: bool, date: Option<&str>) -> Result<PublishDay> {
    if today {
        return Ok(PublishDay::Today);
    }

    match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map(PublishDay::On)
            .map_err(|e| KdcliError::Config(format!("Invalid date format: {}", e))),
        None => Ok(PublishDay::Nearest),
    }
}

/// Turn literal `\n` sequences typed on the command line into newlines
fn unescape_newlines(message: &str) -> String {
    message.replace("\\n", "\n")
}
