use crate::cli::{self, Context};
use crate::display::print_markdown;
use crate::error::Result;
use crate::payload;
use crate::renderer::Renderer;
use crate::services::PhotoLister;

/// List album photos, or just the URLs of the last `last` photos.
///
/// The URL-only form prints nothing else so it can be piped.
pub fn run(ctx: &Context, last: Option<usize>) -> Result<()> {
    let session = ctx.session()?;
    let lister = PhotoLister::new(&ctx.api, &session.user_token);

    if let Some(count) = last {
        for url in lister.last_n_photos(count)? {
            println!("{}", url);
        }
        return Ok(());
    }

    cli::print_login(&session);
    let photos = lister.list_all_photos()?;
    let renderer = Renderer::new(payload::zone(ctx.config.schedule.utc_offset_hours)?);
    print_markdown(&renderer.render_photos(&photos));
    Ok(())
}
